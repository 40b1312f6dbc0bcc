//! CSS value evaluation for lengths, times and colors.
//!
//! The wall's configuration carries CSS expressions (`clamp(8rem, 1rem +
//! 30vmin, 25rem)`, `60s`, `#060606`). Targets without a CSS engine resolve
//! them here against a [`Viewport`].
//!
//! Supported lengths: `px`, `rem`, `em`, `vw`, `vh`, `vmin`, `vmax`, `%`,
//! unitless zero, and the math functions `calc()`, `clamp()`, `min()` and
//! `max()` with `+ - * /`. Custom properties (`var()`) are not resolved.

use kurbo::Size;
use peniko::color::{self, Srgb};
use peniko::Color;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while evaluating a CSS value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("Empty value")]
    Empty,
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Unexpected '{found}' at offset {position}")]
    Unexpected { position: usize, found: String },
    #[error("Unexpected end of value")]
    UnexpectedEnd,
    #[error("Unknown function: {0}()")]
    UnknownFunction(String),
    #[error("Type mismatch: {0}")]
    TypeMismatch(&'static str),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Negative time: {0}")]
    NegativeTime(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for value evaluation.
pub type ValueResult<T> = Result<T, ValueError>;

/// The context relative units resolve against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Root font size (`rem`).
    pub root_font_size: f64,
    /// Element font size (`em`).
    pub font_size: f64,
    /// Length that `100%` refers to.
    pub percent_base: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Viewport {
    /// Browser-like defaults: 16px fonts, percentages relative to the width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            root_font_size: 16.0,
            font_size: 16.0,
            percent_base: width,
        }
    }

    /// Viewport from a kurbo size.
    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Set what `100%` refers to.
    pub fn with_percent_base(mut self, base: f64) -> Self {
        self.percent_base = base;
        self
    }
}

/// A length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Percent,
}

impl LengthUnit {
    fn from_name(name: &str) -> ValueResult<Self> {
        match name {
            "px" => Ok(Self::Px),
            "rem" => Ok(Self::Rem),
            "em" => Ok(Self::Em),
            "vw" => Ok(Self::Vw),
            "vh" => Ok(Self::Vh),
            "vmin" => Ok(Self::Vmin),
            "vmax" => Ok(Self::Vmax),
            _ => Err(ValueError::UnknownUnit(name.to_string())),
        }
    }

    /// Pixels per one of this unit.
    fn px(self, vp: &Viewport) -> f64 {
        match self {
            Self::Px => 1.0,
            Self::Rem => vp.root_font_size,
            Self::Em => vp.font_size,
            Self::Vw => vp.width / 100.0,
            Self::Vh => vp.height / 100.0,
            Self::Vmin => vp.width.min(vp.height) / 100.0,
            Self::Vmax => vp.width.max(vp.height) / 100.0,
            Self::Percent => vp.percent_base / 100.0,
        }
    }
}

/// A parsed CSS length expression.
#[derive(Debug, Clone, PartialEq)]
pub enum CssLength {
    /// A number with a unit.
    Dimension(f64, LengthUnit),
    /// A unitless number. Only valid as a factor inside math functions,
    /// or as a bare zero.
    Number(f64),
    Sum(Box<CssLength>, Box<CssLength>),
    Difference(Box<CssLength>, Box<CssLength>),
    /// A length scaled by a number (covers both `*` and `/`).
    Scale(Box<CssLength>, f64),
    Clamp(Box<CssLength>, Box<CssLength>, Box<CssLength>),
    Min(Vec<CssLength>),
    Max(Vec<CssLength>),
}

impl CssLength {
    /// Parse a CSS length.
    pub fn parse(input: &str) -> ValueResult<Self> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ValueError::Empty);
        }
        let mut parser = Parser { tokens, pos: 0 };
        let value = parser.parse_factor()?;
        parser.expect_end()?;
        match value {
            CssLength::Number(n) if n == 0.0 => Ok(CssLength::Dimension(0.0, LengthUnit::Px)),
            CssLength::Number(_) => Err(ValueError::TypeMismatch("length requires a unit")),
            other => Ok(other),
        }
    }

    /// Resolve to pixels.
    pub fn resolve(&self, vp: &Viewport) -> f64 {
        match self {
            CssLength::Dimension(value, unit) => value * unit.px(vp),
            CssLength::Number(n) => *n,
            CssLength::Sum(a, b) => a.resolve(vp) + b.resolve(vp),
            CssLength::Difference(a, b) => a.resolve(vp) - b.resolve(vp),
            CssLength::Scale(a, k) => a.resolve(vp) * k,
            // clamp() = max(MIN, min(VAL, MAX)): MIN wins when MIN > MAX
            CssLength::Clamp(min, val, max) => min.resolve(vp).max(val.resolve(vp).min(max.resolve(vp))),
            CssLength::Min(args) => args.iter().map(|a| a.resolve(vp)).fold(f64::INFINITY, f64::min),
            CssLength::Max(args) => args.iter().map(|a| a.resolve(vp)).fold(f64::NEG_INFINITY, f64::max),
        }
    }

    fn is_number(&self) -> bool {
        matches!(self, CssLength::Number(_))
    }
}

impl FromStr for CssLength {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A parsed CSS time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssTime {
    seconds: f64,
}

impl CssTime {
    /// Parse a time such as `60s` or `500ms`. Negative times are rejected.
    pub fn parse(input: &str) -> ValueResult<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValueError::Empty);
        }
        let (number, scale) = if let Some(n) = s.strip_suffix("ms") {
            (n, 0.001)
        } else if let Some(n) = s.strip_suffix('s') {
            (n, 1.0)
        } else {
            let unit: String = s
                .chars()
                .skip_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
                .collect();
            return Err(ValueError::UnknownUnit(unit));
        };
        let value: f64 = number.trim().parse().map_err(|_| ValueError::Unexpected {
            position: 0,
            found: number.to_string(),
        })?;
        if value < 0.0 || !value.is_finite() {
            return Err(ValueError::NegativeTime(s.to_string()));
        }
        Ok(Self { seconds: value * scale })
    }

    /// Create a time from seconds.
    pub fn from_secs(seconds: f64) -> Self {
        Self { seconds: seconds.max(0.0) }
    }

    /// The time in seconds.
    pub fn as_secs(&self) -> f64 {
        self.seconds
    }
}

impl FromStr for CssTime {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse any CSS color (hex, `rgb()`, `hsl()`, named colors, ...).
pub fn parse_color(input: &str) -> ValueResult<Color> {
    color::parse_color(input.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|e| ValueError::InvalidColor(format!("{input} ({e:?})")))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Dimension(f64, String),
    Percentage(f64),
    /// Function name; the opening parenthesis is consumed with it.
    Function(String),
    /// `--name`, only valid as a `var()` argument.
    CustomProperty(String),
    OpenParen,
    CloseParen,
    Comma,
    Plus,
    Minus,
    Star,
    Slash,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Dimension(n, unit) => format!("{n}{unit}"),
            Token::Percentage(n) => format!("{n}%"),
            Token::Function(name) => format!("{name}("),
            Token::CustomProperty(name) => name.clone(),
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
        }
    }
}

fn tokenize(input: &str) -> ValueResult<Vec<(usize, Token)>> {
    let bytes = input.as_bytes();
    let mut tokens: Vec<(usize, Token)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'(' => {
                tokens.push((i, Token::OpenParen));
                i += 1;
            }
            b')' => {
                tokens.push((i, Token::CloseParen));
                i += 1;
            }
            b',' => {
                tokens.push((i, Token::Comma));
                i += 1;
            }
            b'*' => {
                tokens.push((i, Token::Star));
                i += 1;
            }
            b'/' => {
                tokens.push((i, Token::Slash));
                i += 1;
            }
            b'+' | b'-' => {
                let starts_number = bytes
                    .get(i + 1)
                    .is_some_and(|b| b.is_ascii_digit() || *b == b'.');
                let starts_property = c == b'-'
                    && bytes.get(i + 1) == Some(&b'-')
                    && bytes
                        .get(i + 2)
                        .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'-' || *b == b'_');
                if starts_property {
                    let start = i;
                    i += 2;
                    while i < bytes.len()
                        && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-' || bytes[i] == b'_')
                    {
                        i += 1;
                    }
                    tokens.push((start, Token::CustomProperty(input[start..i].to_string())));
                } else if starts_number && sign_allowed(&tokens) {
                    let (token, next) = lex_number(input, i)?;
                    tokens.push((i, token));
                    i = next;
                } else {
                    let op = if c == b'+' { Token::Plus } else { Token::Minus };
                    tokens.push((i, op));
                    i += 1;
                }
            }
            b'0'..=b'9' | b'.' => {
                let (token, next) = lex_number(input, i)?;
                tokens.push((i, token));
                i = next;
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
                    i += 1;
                }
                let name = input[start..i].to_ascii_lowercase();
                if bytes.get(i) == Some(&b'(') {
                    tokens.push((start, Token::Function(name)));
                    i += 1;
                } else {
                    return Err(ValueError::Unexpected { position: start, found: name });
                }
            }
            _ => {
                let found = input[i..].chars().next().map(String::from).unwrap_or_default();
                return Err(ValueError::Unexpected { position: i, found });
            }
        }
    }

    Ok(tokens)
}

/// A leading `+`/`-` is a sign only where an operand is expected.
fn sign_allowed(tokens: &[(usize, Token)]) -> bool {
    matches!(
        tokens.last(),
        None | Some((
            _,
            Token::OpenParen
                | Token::Comma
                | Token::Plus
                | Token::Minus
                | Token::Star
                | Token::Slash
                | Token::Function(_)
        ))
    )
}

fn lex_number(input: &str, start: usize) -> ValueResult<(Token, usize)> {
    let bytes = input.as_bytes();
    let mut i = start;
    if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    // Exponent, but not the `e` of an `em` unit.
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let digits_at = match bytes.get(i + 1) {
            Some(b'+') | Some(b'-') => i + 2,
            _ => i + 1,
        };
        if bytes.get(digits_at).is_some_and(u8::is_ascii_digit) {
            i = digits_at;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    let literal = &input[start..i];
    let value: f64 = literal.parse().map_err(|_| ValueError::Unexpected {
        position: start,
        found: literal.to_string(),
    })?;

    if bytes.get(i) == Some(&b'%') {
        return Ok((Token::Percentage(value), i + 1));
    }

    let unit_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i > unit_start {
        let unit = input[unit_start..i].to_ascii_lowercase();
        Ok((Token::Dimension(value, unit), i))
    } else {
        Ok((Token::Number(value), i))
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn next(&mut self) -> ValueResult<Token> {
        let (_, token) = self.tokens.get(self.pos).cloned().ok_or(ValueError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn unexpected(&self) -> ValueError {
        match self.tokens.get(self.pos) {
            Some((position, token)) => ValueError::Unexpected {
                position: *position,
                found: token.describe(),
            },
            None => ValueError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, expected: Token) -> ValueResult<()> {
        if self.peek() == Some(&expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_end(&self) -> ValueResult<()> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_sum(&mut self) -> ValueResult<CssLength> {
        let mut lhs = self.parse_product()?;
        loop {
            let subtract = match self.peek() {
                Some(Token::Plus) => false,
                Some(Token::Minus) => true,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.parse_product()?;
            lhs = match (lhs, rhs) {
                (CssLength::Number(a), CssLength::Number(b)) => {
                    CssLength::Number(if subtract { a - b } else { a + b })
                }
                (a, b) if a.is_number() || b.is_number() => {
                    return Err(ValueError::TypeMismatch("cannot add a number to a length"));
                }
                (a, b) if subtract => CssLength::Difference(Box::new(a), Box::new(b)),
                (a, b) => CssLength::Sum(Box::new(a), Box::new(b)),
            };
        }
    }

    fn parse_product(&mut self) -> ValueResult<CssLength> {
        let mut lhs = self.parse_factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.parse_factor()?;
                    lhs = match (lhs, rhs) {
                        (CssLength::Number(a), CssLength::Number(b)) => CssLength::Number(a * b),
                        (CssLength::Number(k), len) | (len, CssLength::Number(k)) => {
                            CssLength::Scale(Box::new(len), k)
                        }
                        _ => return Err(ValueError::TypeMismatch("cannot multiply two lengths")),
                    };
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let divisor = match self.parse_factor()? {
                        CssLength::Number(d) => d,
                        _ => return Err(ValueError::TypeMismatch("divisor must be a number")),
                    };
                    if divisor == 0.0 {
                        return Err(ValueError::DivisionByZero);
                    }
                    lhs = match lhs {
                        CssLength::Number(a) => CssLength::Number(a / divisor),
                        len => CssLength::Scale(Box::new(len), 1.0 / divisor),
                    };
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_factor(&mut self) -> ValueResult<CssLength> {
        match self.next()? {
            Token::Number(n) => Ok(CssLength::Number(n)),
            Token::Dimension(value, unit) => {
                Ok(CssLength::Dimension(value, LengthUnit::from_name(&unit)?))
            }
            Token::Percentage(value) => Ok(CssLength::Dimension(value, LengthUnit::Percent)),
            Token::OpenParen => {
                let inner = self.parse_sum()?;
                self.expect(Token::CloseParen)?;
                Ok(inner)
            }
            Token::Function(name) => self.parse_function(name),
            _ => {
                self.pos -= 1;
                Err(self.unexpected())
            }
        }
    }

    fn parse_function(&mut self, name: String) -> ValueResult<CssLength> {
        match name.as_str() {
            "calc" => {
                let inner = self.parse_sum()?;
                self.expect(Token::CloseParen)?;
                Ok(inner)
            }
            "clamp" => {
                let args = self.parse_length_args()?;
                let [min, val, max]: [CssLength; 3] = args
                    .try_into()
                    .map_err(|_| ValueError::TypeMismatch("clamp() takes three arguments"))?;
                Ok(CssLength::Clamp(Box::new(min), Box::new(val), Box::new(max)))
            }
            "min" => Ok(CssLength::Min(self.parse_length_args()?)),
            "max" => Ok(CssLength::Max(self.parse_length_args()?)),
            _ => Err(ValueError::UnknownFunction(name)),
        }
    }

    /// Comma-separated length arguments up to and including the closing parenthesis.
    fn parse_length_args(&mut self) -> ValueResult<Vec<CssLength>> {
        let mut args = Vec::new();
        loop {
            let arg = self.parse_sum()?;
            if arg.is_number() {
                return Err(ValueError::TypeMismatch("function argument must be a length"));
            }
            args.push(arg);
            match self.next()? {
                Token::Comma => continue,
                Token::CloseParen => return Ok(args),
                _ => {
                    self.pos -= 1;
                    return Err(self.unexpected());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SIZE;

    fn px(input: &str, vp: &Viewport) -> f64 {
        CssLength::parse(input).unwrap().resolve(vp)
    }

    #[test]
    fn test_simple_units() {
        let vp = Viewport::new(1000.0, 500.0);
        assert!((px("200px", &vp) - 200.0).abs() < 1e-9);
        assert!((px("10rem", &vp) - 160.0).abs() < 1e-9);
        assert!((px("10vw", &vp) - 100.0).abs() < 1e-9);
        assert!((px("10vh", &vp) - 50.0).abs() < 1e-9);
        assert!((px("10vmin", &vp) - 50.0).abs() < 1e-9);
        assert!((px("10vmax", &vp) - 100.0).abs() < 1e-9);
        assert!((px("0", &vp)).abs() < 1e-9);
    }

    #[test]
    fn test_default_size_clamps() {
        // 1rem + 30vmin = 16 + 240
        assert!((px(DEFAULT_SIZE, &Viewport::new(1000.0, 800.0)) - 256.0).abs() < 1e-9);
        // Lower bound 8rem
        assert!((px(DEFAULT_SIZE, &Viewport::new(200.0, 200.0)) - 128.0).abs() < 1e-9);
        // Upper bound 25rem
        assert!((px(DEFAULT_SIZE, &Viewport::new(4000.0, 4000.0)) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_calc_arithmetic() {
        let vp = Viewport::new(1000.0, 800.0);
        assert!((px("calc(210px / 1.5)", &vp) - 140.0).abs() < 1e-9);
        assert!((px("calc(2 * 3px)", &vp) - 6.0).abs() < 1e-9);
        assert!((px("calc(100% - 20px)", &vp) - 980.0).abs() < 1e-9);
        assert!((px("calc((10px + 4px) * 2)", &vp) - 28.0).abs() < 1e-9);
        assert!((px("calc(-5px + 10px)", &vp) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_min_max() {
        let vp = Viewport::new(1000.0, 800.0);
        assert!((px("min(10px, 2rem, 5vw)", &vp) - 10.0).abs() < 1e-9);
        assert!((px("max(10px, 2rem)", &vp) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_min_wins_over_max() {
        let vp = Viewport::default();
        assert!((px("clamp(50px, 10px, 20px)", &vp) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(CssLength::parse(""), Err(ValueError::Empty));
        assert_eq!(CssLength::parse("   "), Err(ValueError::Empty));
        assert!(matches!(CssLength::parse("200"), Err(ValueError::TypeMismatch(_))));
        assert_eq!(
            CssLength::parse("5furlongs"),
            Err(ValueError::UnknownUnit("furlongs".to_string()))
        );
        assert_eq!(CssLength::parse("calc(1px / 0)"), Err(ValueError::DivisionByZero));
        assert!(matches!(CssLength::parse("calc(1px + 2)"), Err(ValueError::TypeMismatch(_))));
        assert!(matches!(CssLength::parse("calc(1px * 2px)"), Err(ValueError::TypeMismatch(_))));
        assert!(matches!(
            CssLength::parse("var(--size)"),
            Err(ValueError::UnknownFunction(_))
        ));
        assert!(matches!(CssLength::parse("10px 20px"), Err(ValueError::Unexpected { .. })));
        assert_eq!(CssLength::parse("calc(10px"), Err(ValueError::UnexpectedEnd));
        assert!(matches!(CssLength::parse("clamp(1px, 2px)"), Err(ValueError::TypeMismatch(_))));
        assert!(matches!(CssLength::parse("red"), Err(ValueError::Unexpected { .. })));
    }

    #[test]
    fn test_custom_property_is_not_resolved() {
        assert_eq!(
            CssLength::parse("var(--size)"),
            Err(ValueError::UnknownFunction("var".to_string()))
        );
        assert_eq!(
            CssLength::parse("calc(var(--size) / 14)"),
            Err(ValueError::UnknownFunction("var".to_string()))
        );
        assert_eq!(
            CssLength::parse("--size"),
            Err(ValueError::Unexpected {
                position: 0,
                found: "--size".to_string()
            })
        );
    }

    #[test]
    fn test_exponent_numbers() {
        let vp = Viewport::new(1000.0, 800.0);
        assert!((px("1e3px", &vp) - 1000.0).abs() < 1e-9);
        assert!((px("1E3px", &vp) - 1000.0).abs() < 1e-9);
        assert!((px("5e-1px", &vp) - 0.5).abs() < 1e-9);
        assert!((px("2.5e+1px", &vp) - 25.0).abs() < 1e-9);
        assert!((px("calc(1e1px * 2)", &vp) - 20.0).abs() < 1e-9);
        // `e` without digits is still the start of a unit.
        assert!((px("2em", &vp) - 32.0).abs() < 1e-9);
        assert_eq!(
            CssLength::parse("1efoo"),
            Err(ValueError::UnknownUnit("efoo".to_string()))
        );
        assert!((CssTime::parse("1e3ms").unwrap().as_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_base() {
        let vp = Viewport::from_size(Size::new(1000.0, 500.0)).with_percent_base(200.0);
        assert!((px("50%", &vp) - 100.0).abs() < 1e-9);
        assert!((px("calc(100% - 1em)", &vp) - 184.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_str() {
        let len: CssLength = "12px".parse().unwrap();
        assert_eq!(len, CssLength::Dimension(12.0, LengthUnit::Px));
    }

    #[test]
    fn test_time_parse() {
        assert!((CssTime::parse("60s").unwrap().as_secs() - 60.0).abs() < 1e-9);
        assert!((CssTime::parse("500ms").unwrap().as_secs() - 0.5).abs() < 1e-9);
        assert!((CssTime::parse(" 1.5s ").unwrap().as_secs() - 1.5).abs() < 1e-9);
        assert!(CssTime::parse("0s").unwrap().as_secs().abs() < 1e-9);
        assert_eq!(CssTime::from_secs(-2.0).as_secs(), 0.0);
        let parsed: CssTime = "2s".parse().unwrap();
        assert_eq!(parsed, CssTime::from_secs(2.0));
    }

    #[test]
    fn test_time_errors() {
        assert_eq!(CssTime::parse(""), Err(ValueError::Empty));
        assert!(matches!(CssTime::parse("-1s"), Err(ValueError::NegativeTime(_))));
        assert!(matches!(CssTime::parse("60"), Err(ValueError::UnknownUnit(_))));
        assert!(matches!(CssTime::parse("fast s"), Err(ValueError::Unexpected { .. })));
    }

    #[test]
    fn test_parse_color() {
        let color = parse_color("#060606").unwrap();
        let rgba = color.to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (6, 6, 6, 255));

        let named = parse_color("white").unwrap().to_rgba8();
        assert_eq!((named.r, named.g, named.b), (255, 255, 255));

        assert!(matches!(parse_color("not-a-color"), Err(ValueError::InvalidColor(_))));
    }
}
