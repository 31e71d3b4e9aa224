//! Outline text rendering
//!
//! The canonical text form: the trimmed heading, an `'='` underline of the
//! same byte length, then one checkbox line per item in document order.
//! Every line ends in `'\n'`, including the last.

use std::fmt;

use crate::domain::List;

use super::INDENT;

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Serde can deserialize untrimmed text into the fields.
        let heading = self.root.description.trim();
        writeln!(f, "{}", heading)?;
        writeln!(f, "{}", "=".repeat(heading.len()))?;
        for (depth, item) in self.iter() {
            for _ in 0..depth {
                f.write_str(INDENT)?;
            }
            writeln!(
                f,
                "- [{}] {}",
                item.state().marker(),
                item.description().trim()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::List;

    #[test]
    fn renders_heading_with_matching_underline() {
        let list = List::new("Errands");
        assert_eq!(list.render(), "Errands\n=======\n");
    }

    #[test]
    fn renders_nested_items_in_document_order() {
        let mut list = List::new("Root item");
        let first = list.add("Item1");
        first.add("Sub1");
        first.add("Sub2");
        first.add("Sub3").complete();
        let second = list.add("Item2");
        let sub = second.add("Sub1");
        sub.complete();
        sub.add("SubSub1").complete();

        let expected = concat!(
            "Root item\n",
            "=========\n",
            "- [ ] Item1\n",
            "  - [ ] Sub1\n",
            "  - [ ] Sub2\n",
            "  - [X] Sub3\n",
            "- [ ] Item2\n",
            "  - [X] Sub1\n",
            "    - [X] SubSub1\n",
        );
        assert_eq!(list.render(), expected);
    }

    #[test]
    fn display_and_render_agree() {
        let mut list = List::new("Same");
        list.add("thing");
        assert_eq!(list.to_string(), list.render());
    }

    #[test]
    fn underline_counts_bytes_not_chars() {
        let list = List::new("Café");
        assert_eq!(list.render(), "Café\n=====\n");
    }

    #[test]
    fn empty_description_renders_with_a_trailing_space() {
        let mut list = List::new("Odd");
        list.add("   ");
        assert_eq!(list.render(), "Odd\n===\n- [ ] \n");
    }

    #[test]
    fn deserialized_padding_is_trimmed_in_the_output() {
        // Serde is the one path that can put untrimmed text in the fields.
        let json = concat!(
            r#"{"root":{"id":0,"state":"pending","description":"  Padded  ","#,
            r#""children":[{"id":0,"state":"done","description":" item "}]}}"#,
        );
        let list: List = serde_json::from_str(json).unwrap();

        assert_eq!(list.render(), "Padded\n======\n- [X] item\n");
    }
}
