//! Sequential short-code generation
//!
//! Codes are uppercase base-26 counters starting at "AAAA". Each call hands
//! out the current value and advances the counter by one.

/// Starting value and minimum width of the code sequence.
const INITIAL_CODE: &[u8] = b"AAAA";

/// Generates a monotonically increasing sequence of short codes.
///
/// Codes are never reused: when the carry runs past the leftmost position
/// (after `"ZZZZ"`), the code widens by one letter instead of wrapping back
/// to `"AAAA"`.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    current: Vec<u8>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            current: INITIAL_CODE.to_vec(),
        }
    }

    /// Returns the current code and advances the counter.
    pub fn next_code(&mut self) -> String {
        // current is always uppercase ASCII
        let code = String::from_utf8_lossy(&self.current).into_owned();
        self.advance();
        code
    }

    /// Base-26 increment with carry, rightmost position first.
    fn advance(&mut self) {
        for pos in (0..self.current.len()).rev() {
            if self.current[pos] == b'Z' {
                self.current[pos] = b'A';
            } else {
                self.current[pos] += 1;
                return;
            }
        }

        // Carry ran past the leftmost letter: widen rather than wrap, so no
        // code is ever issued twice
        self.current.insert(0, b'A');
        tracing::warn!(width = self.current.len(), "Code space exhausted, widening codes");
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
