use anyhow::Context;

use crate::types::request::RawRequest;

pub const FORMAT_ERROR: &str = "Error: Invalid input format. Ensure only valid entries are provided.";

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> anyhow::Result<()> {
        if !self.eat(expected) {
            anyhow::bail!("expected '{expected}' at offset {}", self.pos);
        }
        Ok(())
    }

    fn number(&mut self) -> anyhow::Result<i32> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.text[start..self.pos];
        if digits.is_empty() {
            anyhow::bail!("expected a floor number at offset {start}");
        }
        digits
            .parse::<i32>()
            .with_context(|| format!("failed to parse '{digits}' as a floor number"))
    }

    fn direction(&mut self) -> anyhow::Result<&'a str> {
        self.expect('\'')?;
        let rest = &self.text[self.pos..];
        let word = ["up", "down"]
            .into_iter()
            .find(|word| rest.starts_with(&format!("{word}'")))
            .with_context(|| format!("expected 'up' or 'down' at offset {}", self.pos))?;
        let start = self.pos;
        self.pos += word.len() + 1;
        Ok(&self.text[start..start + word.len()])
    }

    fn entry(&mut self) -> anyhow::Result<RawRequest> {
        let start = self.pos;
        self.expect('{')?;
        self.skip_whitespace();
        let floor = self.number()?;
        self.skip_whitespace();
        self.expect(',')?;
        self.skip_whitespace();
        let direction = self.direction()?;
        self.skip_whitespace();
        self.expect(',')?;
        self.skip_whitespace();
        let destination = self.number()?;
        self.skip_whitespace();
        self.expect('}')?;
        Ok(RawRequest {
            floor,
            direction: direction.to_string(),
            destination,
            source: self.text[start..self.pos].to_string(),
        })
    }
}

/// Parses a batch such as `[{0,'up',3}, {6,'down',2}]`. Separating commas
/// are optional and a trailing comma is allowed; anything else outside the
/// grammar fails the whole batch.
pub fn parse_batch(input: &str) -> anyhow::Result<Vec<RawRequest>> {
    let mut cursor = Cursor::new(input);
    let mut batch = Vec::new();

    cursor.expect('[')?;
    cursor.skip_whitespace();
    while cursor.peek() == Some('{') {
        batch.push(cursor.entry()?);
        cursor.eat(',');
        cursor.skip_whitespace();
    }
    cursor.expect(']')?;
    if cursor.pos != input.len() {
        anyhow::bail!("unexpected trailing text at offset {}", cursor.pos);
    }
    Ok(batch)
}
