// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Literal-only value parsing.
//!
//! Only literal syntax is accepted: numbers, quoted strings, `None`, `True`,
//! `False` and (possibly nested) lists, tuples, sets and dicts of those.
//! Names, operators and calls (other than the empty `set()`) are rejected,
//! so nothing is ever evaluated.

use crate::value::Value;

/// Nesting deeper than this is rejected rather than risking the stack.
const MAX_DEPTH: usize = 64;

/// Attempt to parse `text` as a literal.
///
/// Returns [None] if `text` is not syntactically a literal, in which case
/// callers keep the original string.
///
/// # Examples
///
/// ```rust
/// use docargs::{parse_literal, Value};
///
/// assert_eq!(parse_literal("42"), Some(Value::Int(42)));
/// assert_eq!(parse_literal(" -1.5e3 "), Some(Value::Float(-1500.0)));
/// assert_eq!(
///     parse_literal("[1, 'two']"),
///     Some(Value::List(vec![Value::Int(1), Value::Str("two".into())]))
/// );
/// assert_eq!(parse_literal("/usr/local/bin"), None);
/// ```
pub fn parse_literal(text: &str) -> Option<Value> {
    let mut parser = Parser::new(text.trim_matches(is_blank));

    let value = parser.top_level()?;

    parser.skip_ws();

    if parser.at_end() {
        Some(value)
    } else {
        None
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
    /// Open brackets; line breaks are only whitespace inside them.
    brackets: usize,
}

impl Parser {
    fn new(text: &str) -> Self {
        Parser {
            chars: text.chars().collect(),
            pos: 0,
            depth: 0,
            brackets: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\x0c' {
                self.pos += 1;
            } else if (c == '\n' || c == '\r') && self.brackets > 0 {
                self.pos += 1;
            } else if c == '\\' && self.peek_at(1) == Some('\n') {
                // Explicit line continuation.
                self.pos += 2;
            } else {
                break;
            }
        }
    }

    /// A value, or a bare comma-separated tuple (`1, 2`).
    fn top_level(&mut self) -> Option<Value> {
        let first = self.value()?;

        self.skip_ws();

        if self.peek() != Some(',') {
            return Some(first);
        }

        let mut items = vec![first];

        while self.eat(',') {
            self.skip_ws();
            if self.at_end() {
                break;
            }
            items.push(self.value()?);
            self.skip_ws();
        }

        Some(Value::Tuple(items))
    }

    fn value(&mut self) -> Option<Value> {
        self.skip_ws();

        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return None;
        }

        let result = match self.peek()? {
            '[' | '(' | '{' => self.bracketed(),
            '\'' | '"' => self.strings(),
            '+' | '-' => self.signed_number(),
            c if c.is_ascii_digit() => self.number(false),
            '.' if self.peek_at(1).map_or(false, |c| c.is_ascii_digit()) => self.number(false),
            c if c.is_alphabetic() || c == '_' => self.name(),
            _ => None,
        };

        self.depth -= 1;

        result
    }

    fn bracketed(&mut self) -> Option<Value> {
        self.brackets += 1;

        let result = match self.peek() {
            Some('[') => {
                self.pos += 1;
                self.sequence(']').map(Value::List)
            }
            Some('(') => self.paren(),
            _ => self.brace(),
        };

        self.brackets -= 1;

        result
    }

    /// Comma separated values up to `close`, trailing comma allowed.
    /// The opening bracket has already been consumed.
    fn sequence(&mut self, close: char) -> Option<Vec<Value>> {
        let mut items = Vec::new();

        loop {
            self.skip_ws();
            if self.eat(close) {
                return Some(items);
            }

            items.push(self.value()?);

            self.skip_ws();
            if self.eat(close) {
                return Some(items);
            }
            if !self.eat(',') {
                return None;
            }
        }
    }

    fn paren(&mut self) -> Option<Value> {
        self.pos += 1;
        self.skip_ws();

        if self.eat(')') {
            return Some(Value::Tuple(Vec::new()));
        }

        let first = self.value()?;

        self.skip_ws();

        // Plain grouping: "(1)" is just 1.
        if self.eat(')') {
            return Some(first);
        }

        if !self.eat(',') {
            return None;
        }

        let mut items = vec![first];
        items.extend(self.sequence(')')?);

        Some(Value::Tuple(items))
    }

    fn brace(&mut self) -> Option<Value> {
        self.pos += 1;
        self.skip_ws();

        if self.eat('}') {
            return Some(Value::Dict(Vec::new()));
        }

        let first = self.value()?;

        self.skip_ws();

        if self.eat(':') {
            self.dict(first)
        } else {
            let mut items = vec![first];

            if !self.eat('}') {
                if !self.eat(',') {
                    return None;
                }
                items.extend(self.sequence('}')?);
            }

            let mut unique: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                if !item.is_hashable() {
                    return None;
                }
                if !unique.iter().any(|u| u.same_key(&item)) {
                    unique.push(item);
                }
            }

            Some(Value::Set(unique))
        }
    }

    /// The first key and its colon have already been consumed.
    fn dict(&mut self, first_key: Value) -> Option<Value> {
        let mut entries: Vec<(Value, Value)> = Vec::new();
        let mut key = first_key;

        loop {
            let value = self.value()?;

            if !key.is_hashable() {
                return None;
            }

            // Duplicate keys keep their first position but take the last value.
            match entries.iter_mut().find(|(k, _)| k.same_key(&key)) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }

            self.skip_ws();
            if self.eat('}') {
                return Some(Value::Dict(entries));
            }
            if !self.eat(',') {
                return None;
            }

            self.skip_ws();
            if self.eat('}') {
                return Some(Value::Dict(entries));
            }

            key = self.value()?;

            self.skip_ws();
            if !self.eat(':') {
                return None;
            }
        }
    }

    fn name(&mut self) -> Option<Value> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }

        let name: String = self.chars[start..self.pos].iter().collect();

        if matches!(self.peek(), Some('\'') | Some('"')) {
            // String prefix: only raw and unicode prefixes produce strings.
            self.pos = start;
            return match name.to_ascii_lowercase().as_str() {
                "r" | "u" => self.strings(),
                _ => None,
            };
        }

        match name.as_str() {
            "None" => Some(Value::None),
            "True" => Some(Value::Bool(true)),
            "False" => Some(Value::Bool(false)),
            "set" => {
                self.skip_ws();
                if !self.eat('(') {
                    return None;
                }
                self.skip_ws();
                if !self.eat(')') {
                    return None;
                }
                Some(Value::Set(Vec::new()))
            }
            _ => None,
        }
    }

    fn signed_number(&mut self) -> Option<Value> {
        let negative = self.bump()? == '-';

        self.skip_ws();

        match self.peek()? {
            c if c.is_ascii_digit() => self.number(negative),
            '.' => self.number(negative),
            _ => None,
        }
    }

    fn digits(&mut self, radix: u32) -> String {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if c.is_digit(radix) || c == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }

        self.chars[start..self.pos].iter().collect()
    }

    fn number(&mut self, negative: bool) -> Option<Value> {
        let sign = if negative { "-" } else { "" };

        let radix = match (self.peek(), self.peek_at(1)) {
            (Some('0'), Some('x')) | (Some('0'), Some('X')) => Some(16),
            (Some('0'), Some('o')) | (Some('0'), Some('O')) => Some(8),
            (Some('0'), Some('b')) | (Some('0'), Some('B')) => Some(2),
            _ => None,
        };

        if let Some(radix) = radix {
            self.pos += 2;

            let raw = self.digits(radix);

            // An underscore may directly follow the prefix.
            let raw = raw.strip_prefix('_').unwrap_or(&raw).to_string();
            let digits = strip_underscores(&raw)?;

            if self.ends_in_name_char() {
                return None;
            }

            return i64::from_str_radix(&format!("{}{}", sign, digits), radix)
                .ok()
                .map(Value::Int);
        }

        let int_part = strip_underscores_or_empty(&self.digits(10))?;

        let mut is_float = false;
        let mut frac_part = String::new();
        let mut exp_part = String::new();

        if self.eat('.') {
            is_float = true;
            frac_part = strip_underscores_or_empty(&self.digits(10))?;
        }

        if matches!(self.peek(), Some('e') | Some('E')) {
            let mark = self.pos;
            self.pos += 1;

            let mut exp_sign = "";
            if self.eat('-') {
                exp_sign = "-";
            } else {
                self.eat('+');
            }

            let exp = strip_underscores(&self.digits(10));

            match exp {
                Some(exp) => {
                    is_float = true;
                    exp_part = format!("e{}{}", exp_sign, exp);
                }
                None => {
                    self.pos = mark;
                    return None;
                }
            }
        }

        if self.ends_in_name_char() {
            // "1j", "12abc", "3_" and friends.
            return None;
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        if is_float {
            let text = format!(
                "{}{}.{}{}",
                sign,
                if int_part.is_empty() { "0" } else { &int_part },
                if frac_part.is_empty() { "0" } else { &frac_part },
                exp_part
            );

            return text.parse::<f64>().ok().map(Value::Float);
        }

        // Leading zeros are only allowed for zero itself.
        if int_part.len() > 1 && int_part.starts_with('0') && int_part.chars().any(|c| c != '0') {
            return None;
        }

        format!("{}{}", sign, int_part)
            .parse::<i64>()
            .ok()
            .map(Value::Int)
    }

    fn ends_in_name_char(&self) -> bool {
        self.peek()
            .map_or(false, |c| c.is_alphanumeric() || c == '_' || c == '.')
    }

    /// One or more adjacent string literals, concatenated.
    fn strings(&mut self) -> Option<Value> {
        let mut result = self.string()?;

        loop {
            let mark = self.pos;
            self.skip_ws();

            if !self.at_string_start() {
                self.pos = mark;
                break;
            }

            result.push_str(&self.string()?);
        }

        Some(Value::Str(result))
    }

    fn at_string_start(&self) -> bool {
        match self.peek() {
            Some('\'') | Some('"') => true,
            Some(c) if "rRuU".contains(c) => matches!(self.peek_at(1), Some('\'') | Some('"')),
            _ => false,
        }
    }

    fn string(&mut self) -> Option<String> {
        let mut raw = false;

        if let Some(c) = self.peek() {
            if "rRuU".contains(c) {
                raw = c == 'r' || c == 'R';
                self.pos += 1;
            }
        }

        let quote = self.bump()?;
        if quote != '\'' && quote != '"' {
            return None;
        }

        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.pos += 2;
        }

        let mut s = String::new();

        loop {
            let c = self.bump()?;

            if c == quote {
                if !triple {
                    return Some(s);
                }
                if self.peek() == Some(quote) && self.peek_at(1) == Some(quote) {
                    self.pos += 2;
                    return Some(s);
                }
                s.push(c);
                continue;
            }

            if c == '\n' && !triple {
                return None;
            }

            if c != '\\' {
                s.push(c);
                continue;
            }

            let next = self.bump()?;

            if raw {
                s.push('\\');
                s.push(next);
                continue;
            }

            match next {
                '\n' => (),
                '\\' | '\'' | '"' => s.push(next),
                'a' => s.push('\x07'),
                'b' => s.push('\x08'),
                'f' => s.push('\x0c'),
                'n' => s.push('\n'),
                'r' => s.push('\r'),
                't' => s.push('\t'),
                'v' => s.push('\x0b'),
                '0'..='7' => {
                    let mut code = next.to_digit(8)?;
                    for _ in 0..2 {
                        match self.peek().and_then(|c| c.to_digit(8)) {
                            Some(d) => {
                                code = code * 8 + d;
                                self.pos += 1;
                            }
                            None => break,
                        }
                    }
                    s.push(std::char::from_u32(code)?);
                }
                'x' => s.push(self.hex_escape(2)?),
                'u' => s.push(self.hex_escape(4)?),
                'U' => s.push(self.hex_escape(8)?),
                // Named escapes need the unicode name table.
                'N' => return None,
                other => {
                    s.push('\\');
                    s.push(other);
                }
            }
        }
    }

    fn hex_escape(&mut self, len: usize) -> Option<char> {
        let mut code: u32 = 0;

        for _ in 0..len {
            let d = self.bump()?.to_digit(16)?;
            code = code.checked_mul(16)?.checked_add(d)?;
        }

        std::char::from_u32(code)
    }
}

/// Remove digit separators, which must sit between two digits.
fn strip_underscores(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.starts_with('_') || raw.ends_with('_') || raw.contains("__") {
        return None;
    }

    Some(raw.replace('_', ""))
}

fn strip_underscores_or_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        Some(String::new())
    } else {
        strip_underscores(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::Str(v.into())
    }

    #[test]
    fn test_parse_scalars() {
        #[derive(Debug)]
        struct TestData<'a> {
            text: &'a str,
            result: Option<Value>,
        }

        let tests = &[
            TestData {
                text: "42",
                result: Some(Value::Int(42)),
            },
            TestData {
                text: "  7\t",
                result: Some(Value::Int(7)),
            },
            TestData {
                text: "-42",
                result: Some(Value::Int(-42)),
            },
            TestData {
                text: "+3",
                result: Some(Value::Int(3)),
            },
            TestData {
                text: "- 3",
                result: Some(Value::Int(-3)),
            },
            TestData {
                text: "--3",
                result: None,
            },
            TestData {
                text: "0",
                result: Some(Value::Int(0)),
            },
            TestData {
                text: "000",
                result: Some(Value::Int(0)),
            },
            TestData {
                text: "007",
                result: None,
            },
            TestData {
                text: "1_000_000",
                result: Some(Value::Int(1_000_000)),
            },
            TestData {
                text: "1__0",
                result: None,
            },
            TestData {
                text: "10_",
                result: None,
            },
            TestData {
                text: "0xff",
                result: Some(Value::Int(255)),
            },
            TestData {
                text: "0X_FF",
                result: Some(Value::Int(255)),
            },
            TestData {
                text: "0o17",
                result: Some(Value::Int(15)),
            },
            TestData {
                text: "0b101",
                result: Some(Value::Int(5)),
            },
            TestData {
                text: "0b102",
                result: None,
            },
            TestData {
                text: "-9223372036854775808",
                result: Some(Value::Int(i64::MIN)),
            },
            TestData {
                text: "9223372036854775808",
                result: None,
            },
            TestData {
                text: "1.5",
                result: Some(Value::Float(1.5)),
            },
            TestData {
                text: "1.",
                result: Some(Value::Float(1.0)),
            },
            TestData {
                text: ".5",
                result: Some(Value::Float(0.5)),
            },
            TestData {
                text: "-.5",
                result: Some(Value::Float(-0.5)),
            },
            TestData {
                text: "1e3",
                result: Some(Value::Float(1000.0)),
            },
            TestData {
                text: "2.5E-1",
                result: Some(Value::Float(0.25)),
            },
            TestData {
                text: "1e",
                result: None,
            },
            TestData {
                text: "1j",
                result: None,
            },
            TestData {
                text: "1.2.3",
                result: None,
            },
            TestData {
                text: "None",
                result: Some(Value::None),
            },
            TestData {
                text: "True",
                result: Some(Value::Bool(true)),
            },
            TestData {
                text: "False",
                result: Some(Value::Bool(false)),
            },
            TestData {
                text: "true",
                result: None,
            },
            TestData {
                text: "-True",
                result: None,
            },
            TestData {
                text: "inf",
                result: None,
            },
            TestData {
                text: "",
                result: None,
            },
            TestData {
                text: "   ",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = parse_literal(d.text);

            let msg = format!("{}, result: {:?}", msg, result);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_parse_strings() {
        #[derive(Debug)]
        struct TestData<'a> {
            text: &'a str,
            result: Option<Value>,
        }

        let tests = &[
            TestData {
                text: "'hello'",
                result: Some(s("hello")),
            },
            TestData {
                text: r#""it's""#,
                result: Some(s("it's")),
            },
            TestData {
                text: r"'a\tb\n'",
                result: Some(s("a\tb\n")),
            },
            TestData {
                text: r"'\x41é\101'",
                result: Some(s("Aé\u{41}")),
            },
            TestData {
                text: r"'\q'",
                result: Some(s("\\q")),
            },
            TestData {
                text: r"r'\d+'",
                result: Some(s("\\d+")),
            },
            TestData {
                text: r"R'a\'b'",
                result: Some(s("a\\'b")),
            },
            TestData {
                text: "u'x'",
                result: Some(s("x")),
            },
            TestData {
                text: "'a' \"b\"",
                result: Some(s("ab")),
            },
            TestData {
                text: "'''multi\nline'''",
                result: Some(s("multi\nline")),
            },
            TestData {
                text: "\"\"\"say \"hi\" \"\"\"",
                result: Some(s("say \"hi\" ")),
            },
            TestData {
                text: "'unterminated",
                result: None,
            },
            TestData {
                text: "'line\nbreak'",
                result: None,
            },
            TestData {
                text: r"'\x4'",
                result: None,
            },
            TestData {
                text: "b'bytes'",
                result: None,
            },
            TestData {
                text: "f'{x}'",
                result: None,
            },
            TestData {
                text: r"'\N{DASH}'",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = parse_literal(d.text);

            let msg = format!("{}, result: {:?}", msg, result);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_parse_collections() {
        #[derive(Debug)]
        struct TestData<'a> {
            text: &'a str,
            result: Option<Value>,
        }

        let tests = &[
            TestData {
                text: "[1, 2, 3]",
                result: Some(Value::List(vec![
                    Value::Int(1),
                    Value::Int(2),
                    Value::Int(3),
                ])),
            },
            TestData {
                text: "[]",
                result: Some(Value::List(vec![])),
            },
            TestData {
                text: "[1, [2, 'x'],]",
                result: Some(Value::List(vec![
                    Value::Int(1),
                    Value::List(vec![Value::Int(2), s("x")]),
                ])),
            },
            TestData {
                text: "[1,,2]",
                result: None,
            },
            TestData {
                text: "[1 2]",
                result: None,
            },
            TestData {
                text: "[1, 2",
                result: None,
            },
            TestData {
                text: "()",
                result: Some(Value::Tuple(vec![])),
            },
            TestData {
                text: "(1)",
                result: Some(Value::Int(1)),
            },
            TestData {
                text: "(1,)",
                result: Some(Value::Tuple(vec![Value::Int(1)])),
            },
            TestData {
                text: "(1, 'a', None)",
                result: Some(Value::Tuple(vec![Value::Int(1), s("a"), Value::None])),
            },
            TestData {
                text: "1, 2",
                result: Some(Value::Tuple(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "1,",
                result: Some(Value::Tuple(vec![Value::Int(1)])),
            },
            TestData {
                text: "{}",
                result: Some(Value::Dict(vec![])),
            },
            TestData {
                text: "{'a': 1, 'b': [True]}",
                result: Some(Value::Dict(vec![
                    (s("a"), Value::Int(1)),
                    (s("b"), Value::List(vec![Value::Bool(true)])),
                ])),
            },
            TestData {
                text: "{'a': 1, 'a': 2, 'b': 3,}",
                result: Some(Value::Dict(vec![
                    (s("a"), Value::Int(2)),
                    (s("b"), Value::Int(3)),
                ])),
            },
            TestData {
                text: "{(1, 2): 'pair'}",
                result: Some(Value::Dict(vec![(
                    Value::Tuple(vec![Value::Int(1), Value::Int(2)]),
                    s("pair"),
                )])),
            },
            TestData {
                text: "{[1]: 2}",
                result: None,
            },
            TestData {
                text: "{'a' 1}",
                result: None,
            },
            TestData {
                text: "{1, 2, 1}",
                result: Some(Value::Set(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "{1}",
                result: Some(Value::Set(vec![Value::Int(1)])),
            },
            TestData {
                text: "{[1], 2}",
                result: None,
            },
            TestData {
                text: "set()",
                result: Some(Value::Set(vec![])),
            },
            TestData {
                text: "set([1])",
                result: None,
            },
            TestData {
                text: "[\n  1,\n  2\n]",
                result: Some(Value::List(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "(1,\r\n 2)",
                result: Some(Value::Tuple(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "{'a': [\n1]\n}",
                result: Some(Value::Dict(vec![(s("a"), Value::List(vec![Value::Int(1)]))])),
            },
            TestData {
                // Line breaks only separate tokens inside brackets.
                text: "1,\n2",
                result: None,
            },
            TestData {
                text: "1\n,2",
                result: None,
            },
            TestData {
                text: "'a'\n'b'",
                result: None,
            },
            TestData {
                text: "[1]\n[2]",
                result: None,
            },
            TestData {
                text: "1, \\\n2",
                result: Some(Value::Tuple(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "\n 42\n",
                result: Some(Value::Int(42)),
            },
            TestData {
                // Numbers compare by value across bool, int and float; the
                // first element wins.
                text: "{1, True}",
                result: Some(Value::Set(vec![Value::Int(1)])),
            },
            TestData {
                text: "{1, 1.0, 2}",
                result: Some(Value::Set(vec![Value::Int(1), Value::Int(2)])),
            },
            TestData {
                text: "{False, 0, 0.0, 1.5}",
                result: Some(Value::Set(vec![Value::Bool(false), Value::Float(1.5)])),
            },
            TestData {
                text: "{(1, 2), (True, 2.0)}",
                result: Some(Value::Set(vec![Value::Tuple(vec![
                    Value::Int(1),
                    Value::Int(2),
                ])])),
            },
            TestData {
                text: "{1, '1'}",
                result: Some(Value::Set(vec![Value::Int(1), s("1")])),
            },
            TestData {
                text: "{1: 'a', True: 'b', 1.0: 'c'}",
                result: Some(Value::Dict(vec![(Value::Int(1), s("c"))])),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let result = parse_literal(d.text);

            let msg = format!("{}, result: {:?}", msg, result);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_non_literals() {
        let tests = &[
            "/usr/local/bin",
            "hello",
            "hello world",
            "foo.txt",
            "1 + 2",
            "__import__('os')",
            "open('/etc/passwd')",
            "[x for x in y]",
            "lambda: 1",
            "1 if True else 2",
            "a, b",
            "2021-01-01",
            "192.168.0.1",
            "-v",
            "[1] [2]",
        ];

        for (i, text) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, text);

            assert_eq!(parse_literal(text), None, "{}", msg);
        }
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}{}", "[".repeat(10), "]".repeat(10));
        assert!(parse_literal(&shallow).is_some());

        let deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
        assert_eq!(parse_literal(&deep), None);
    }

    #[test]
    fn test_display_round_trip() {
        let tests = &[
            "42",
            "-7",
            "0.1",
            "1e+16",
            "2.5e-9",
            "True",
            "None",
            "'it''s'",
            "'tab\\there'",
            "[1, [2.5, 'x'], (3,), ()]",
            "{'a': {1, 2}, 'b': set()}",
        ];

        for (i, text) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, text);

            let value = parse_literal(text);
            assert!(value.is_some(), "{}", msg);

            let value = value.unwrap();
            let reparsed = parse_literal(&value.to_string());

            assert_eq!(reparsed, Some(value), "{}", msg);
        }
    }
}
