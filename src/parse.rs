//! Utility string parsing
//!
//! Reads the notation produced by [`translate_variant_css`] back into a tree:
//!
//! ```text
//! sequence := item*
//! item     := word | label ':' body
//! body     := '(' sequence ')' | item
//! ```
//!
//! Bare classes adjacent at one level form a single class set segment.
//! Square brackets (`bg-[url(a:b)]`) are opaque, so arbitrary values may
//! contain separators and parentheses.
//!
//! [`translate_variant_css`]: crate::render::translate_variant_css

use smallvec::smallvec;

use crate::class_set::{ClassName, ClassSet};
use crate::error::{CssError, CssResult};
use crate::variant::{Label, Segment, Segments, VariantCss};

/// Parse a utility string into an unlabelled tree.
pub fn parse_variant_css(input: &str) -> CssResult<VariantCss> {
    let mut parser = Parser { src: input, pos: 0 };
    let css = parser.parse_sequence(None)?;
    Ok(VariantCss { variant: None, css })
}

impl std::str::FromStr for VariantCss {
    type Err = CssError;

    fn from_str(s: &str) -> CssResult<Self> {
        parse_variant_css(s)
    }
}

enum Item {
    Class(ClassName),
    Variant(VariantCss),
}

/// Collects items of one level, grouping adjacent classes.
#[derive(Default)]
struct Sequence {
    segments: Segments,
    pending: ClassSet,
}

impl Sequence {
    fn push(&mut self, item: Item) {
        match item {
            Item::Class(class) => {
                self.pending.insert(class);
            }
            Item::Variant(node) => {
                self.flush();
                self.segments.push(Segment::nested(node));
            }
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let classes = std::mem::take(&mut self.pending);
            self.segments.push(Segment::Classes(classes));
        }
    }

    fn finish(mut self) -> Segments {
        self.flush();
        self.segments
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Parse items until end of input, or until the `)` closing the group
    /// opened at `open`.
    fn parse_sequence(&mut self, open: Option<usize>) -> CssResult<Segments> {
        let mut sequence = Sequence::default();
        loop {
            self.skip_whitespace();
            match (self.peek(), open) {
                (None, None) => return Ok(sequence.finish()),
                (None, Some(offset)) => return Err(CssError::UnclosedGroup { offset }),
                (Some(')'), Some(_)) => {
                    self.bump();
                    return Ok(sequence.finish());
                }
                (Some(')'), None) => return Err(CssError::UnexpectedClose { offset: self.pos }),
                (Some(_), _) => {
                    let item = self.parse_item()?;
                    sequence.push(item);
                }
            }
        }
    }

    fn parse_item(&mut self) -> CssResult<Item> {
        let word = self.read_word();
        match self.peek() {
            Some(':') if word.is_empty() => Err(CssError::EmptyVariantLabel { offset: self.pos }),
            Some(':') => {
                self.bump();
                let css = self.parse_body(word)?;
                Ok(Item::Variant(VariantCss {
                    variant: Some(Label::from(word)),
                    css,
                }))
            }
            Some('(') if word.is_empty() => Err(CssError::UnexpectedOpen { offset: self.pos }),
            _ => Ok(Item::Class(ClassName::from(word))),
        }
    }

    fn parse_body(&mut self, label: &str) -> CssResult<Segments> {
        let offset = self.pos;
        match self.peek() {
            Some('(') => {
                self.bump();
                self.parse_sequence(Some(offset))
            }
            Some(c) if !c.is_whitespace() && c != ')' => Ok(match self.parse_item()? {
                Item::Class(class) => smallvec![Segment::Classes(ClassSet::single(class))],
                Item::Variant(node) => smallvec![Segment::nested(node)],
            }),
            _ => Err(CssError::missing_body(label, offset)),
        }
    }

    /// Read up to the next whitespace, `:`, `(` or `)` outside brackets.
    fn read_word(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '[' => depth += 1,
                ']' => depth = depth.saturating_sub(1),
                ':' | '(' | ')' if depth == 0 => break,
                c if c.is_whitespace() && depth == 0 => break,
                _ => {}
            }
            self.bump();
        }
        &src[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::translate_variant_css;

    fn set(classes: &str) -> ClassSet {
        ClassSet::from_whitespace(classes)
    }

    #[test]
    fn test_parse_flat() {
        let tree = parse_variant_css("bg-red  px-4").unwrap();
        assert_eq!(tree, VariantCss::from_classes(set("bg-red px-4")));
        assert_eq!(parse_variant_css("   ").unwrap(), VariantCss::new());
    }

    #[test]
    fn test_parse_variants() {
        let tree = parse_variant_css("bg-red hover:(bg-blue px-8) focus:ring").unwrap();
        let expected = VariantCss::from_classes(set("bg-red"))
            .nested(VariantCss::labelled("hover").classes(set("bg-blue px-8")))
            .nested(VariantCss::labelled("focus").classes(set("ring")));
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_parse_chained_variants() {
        let tree = parse_variant_css("focus:disabled:bg-gray-300").unwrap();
        let expected = VariantCss::new().nested(
            VariantCss::labelled("focus")
                .nested(VariantCss::labelled("disabled").classes(set("bg-gray-300"))),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_parse_arbitrary_values() {
        let tree = parse_variant_css("bg-[url(a:b)] hover:w-[calc(100%-2px)]").unwrap();
        assert_eq!(
            translate_variant_css(&tree),
            "bg-[url(a:b)] hover:w-[calc(100%-2px)]"
        );
    }

    #[test]
    fn test_render_parse_round_trip() {
        let source = "bg-red px-4 hover:(bg-blue px-8) focus:(bg-green px-12 disabled:bg-gray-300)";
        let tree: VariantCss = source.parse().unwrap();
        assert_eq!(translate_variant_css(&tree), source);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_variant_css("hover:(bg-red").unwrap_err(),
            CssError::UnclosedGroup { offset: 6 }
        );
        assert_eq!(
            parse_variant_css("bg-red)").unwrap_err(),
            CssError::UnexpectedClose { offset: 6 }
        );
        assert_eq!(
            parse_variant_css(":bg-red").unwrap_err(),
            CssError::EmptyVariantLabel { offset: 0 }
        );
        assert_eq!(
            parse_variant_css("px-4 hover: bg-red").unwrap_err(),
            CssError::missing_body("hover", 11)
        );
        assert_eq!(
            parse_variant_css("(bg-red)").unwrap_err(),
            CssError::UnexpectedOpen { offset: 0 }
        );
    }
}
