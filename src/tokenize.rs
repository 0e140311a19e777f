use std::str::Chars;

const LINE_END: char = '\n';

/// Unicode separator characters (Zs, Zl, Zp) and the line terminator.
/// Only these end a word; tab and other control characters do not.
fn is_boundary(c: char) -> bool {
    match c {
        LINE_END => true,
        ' ' | '\u{a0}' | '\u{1680}' | '\u{202f}' | '\u{205f}' | '\u{3000}' => true,
        '\u{2000}'..='\u{200a}' => true,
        '\u{2028}' | '\u{2029}' => true,
        _ => false,
    }
}

/// Lazy word iterator over one line. Letters are folded to lowercase,
/// boundary characters flush the current word, everything else is kept
/// verbatim. Clone to restart from the beginning of the line.
#[derive(Clone)]
pub struct Tokens<'a> {
    rest: Chars<'a>,
}

pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { rest: line.chars() }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut word = String::new();
        for c in &mut self.rest {
            if c.is_alphabetic() {
                word.extend(c.to_lowercase());
            } else if is_boundary(c) {
                if !word.is_empty() {
                    return Some(word);
                }
            } else {
                word.push(c);
            }
        }

        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}
