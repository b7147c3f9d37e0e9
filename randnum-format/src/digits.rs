/// Fraction digits requested from `{:e}` when expanding a float. Every
/// double's decimal expansion terminates within 767 significant digits, so
/// this yields the binary value itself.
const EXACT_DIGITS: usize = 767;

/// Unsigned decimal number: `0.d1 d2 d3 ... * 10^scale`.
///
/// `digits` never carries trailing zeros; zero is the empty buffer with
/// scale 0. For 123.45 the digits are `12345` and the scale is 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Digits {
    digits: Vec<u8>,
    scale: i32,
}

impl Digits {
    pub fn zero() -> Self {
        Digits {
            digits: Vec::new(),
            scale: 0,
        }
    }

    fn new(mut digits: Vec<u8>, scale: i32) -> Self {
        while digits.last() == Some(&0) {
            digits.pop();
        }
        if digits.is_empty() {
            return Self::zero();
        }
        Digits { digits, scale }
    }

    pub fn from_u64(value: u64) -> Self {
        let text = value.to_string();
        let digits = text.bytes().map(|b| b - b'0').collect::<Vec<_>>();
        Self::new(digits, text.len() as i32)
    }

    pub fn from_f64_exact(value: f64) -> Self {
        Self::from_exponential(&format!("{:.*e}", EXACT_DIGITS, value.abs()))
    }

    pub fn from_f64_shortest(value: f64) -> Self {
        Self::from_exponential(&format!("{:e}", value.abs()))
    }

    /// Read Rust's `{:e}` rendering: `d.ddde-7`, `de3`, `0e0`
    fn from_exponential(text: &str) -> Self {
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        // Only zero renders with a leading 0
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        if leading == digits.len() {
            return Self::zero();
        }

        Self::new(digits[leading..].to_vec(), exponent + 1 - leading as i32)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits left of the decimal point (may be zero or negative)
    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Multiply by `10^places`
    pub fn shift(&mut self, places: i32) {
        if !self.is_zero() {
            self.scale += places;
        }
    }

    /// Keep the first `keep` significant digits, rounding half away from zero
    pub fn round_significant(&mut self, keep: i32) {
        if keep < 0 {
            *self = Self::zero();
            return;
        }
        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);

        if round_up {
            let mut carry = true;
            for d in self.digits.iter_mut().rev() {
                if *d == 9 {
                    *d = 0;
                } else {
                    *d += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.scale += 1;
            }
        }

        *self = Self::new(std::mem::take(&mut self.digits), self.scale);
    }

    /// Round to `places` digits after the decimal point
    pub fn round_fraction(&mut self, places: i32) {
        self.round_significant(self.scale.saturating_add(places));
    }

    fn digit_at(&self, index: i64) -> u8 {
        if index < 0 {
            return 0;
        }
        self.digits.get(index as usize).copied().unwrap_or(0)
    }

    /// Digits left of the point without leading zeros; empty when below one
    pub fn integer_part(&self) -> String {
        (0..self.scale.max(0) as i64)
            .map(|i| char::from(b'0' + self.digit_at(i)))
            .collect()
    }

    /// Exactly `places` digits right of the point, zero-filled
    pub fn fraction_part(&self, places: usize) -> String {
        (0..places as i64)
            .map(|i| char::from(b'0' + self.digit_at(self.scale as i64 + i)))
            .collect()
    }

    /// Digits right of the point that are actually present
    pub fn fraction_len(&self) -> usize {
        (self.digits.len() as i64 - self.scale as i64).max(0) as usize
    }

    /// All significant digits, `"0"` for zero
    pub fn significant(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        self.digits.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}
