/// A parsed numeric format specifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumberFormat {
    /// No specifier: plain integers, shortest round-trip floats
    #[default]
    Default,
    /// One letter plus optional precision, e.g. `F2` or `x8`
    Standard(StandardFormat),
    /// Placeholder pattern such as `#,##0.00;(#,##0.00);zero`
    Custom(CustomFormat),
}

/// Standard specifier letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardKind {
    Currency,
    Decimal,
    Exponential,
    FixedPoint,
    General,
    Number,
    Percent,
    RoundTrip,
    Hexadecimal,
}

impl StandardKind {
    /// Map a specifier letter (either case) to its kind
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(StandardKind::Currency),
            'D' => Some(StandardKind::Decimal),
            'E' => Some(StandardKind::Exponential),
            'F' => Some(StandardKind::FixedPoint),
            'G' => Some(StandardKind::General),
            'N' => Some(StandardKind::Number),
            'P' => Some(StandardKind::Percent),
            'R' => Some(StandardKind::RoundTrip),
            'X' => Some(StandardKind::Hexadecimal),
            _ => None,
        }
    }

    /// Canonical (upper-case) letter
    pub fn letter(&self) -> char {
        match self {
            StandardKind::Currency => 'C',
            StandardKind::Decimal => 'D',
            StandardKind::Exponential => 'E',
            StandardKind::FixedPoint => 'F',
            StandardKind::General => 'G',
            StandardKind::Number => 'N',
            StandardKind::Percent => 'P',
            StandardKind::RoundTrip => 'R',
            StandardKind::Hexadecimal => 'X',
        }
    }

    /// Specifiers that only make sense for integral values
    pub fn is_integer_only(&self) -> bool {
        matches!(self, StandardKind::Decimal | StandardKind::Hexadecimal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardFormat {
    pub kind: StandardKind,
    /// Upper-case letter given; controls `E` and hex digit case
    pub upper: bool,
    pub precision: Option<u32>,
}

/// Up to three `;`-separated sections: positive, negative, zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFormat {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub tokens: Vec<Token>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// One element of a custom section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `0`
    Zero,
    /// `#`
    Digit,
    /// `.`
    Point,
    /// `,`
    Group,
    /// `%`
    Percent,
    /// `‰`
    PerMille,
    /// `E+00` and friends
    Exponent {
        upper: bool,
        always_sign: bool,
        min_digits: usize,
    },
    /// Quoted, escaped, or plain literal text
    Literal(String),
}

impl Token {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Token::Zero | Token::Digit)
    }
}
