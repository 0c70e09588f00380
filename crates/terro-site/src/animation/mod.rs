//! Animation controller
//!
//! Scroll reveal, counting numbers, parallax, the hero gradient and
//! floating-element delays. Each part binds on its own; the group is
//! skipped only when none of them found anything to animate.

mod counter;
mod floating;
mod gradient;
mod parallax;
mod reveal;

pub use counter::{CounterAnimation, CounterSpec, Counters};
pub use floating::apply_floating_delays;
pub use gradient::Gradient;
pub use parallax::Parallax;
pub use reveal::Reveal;

use terro_runtime::{Dispatch, Event, Page};

use crate::behavior::{Behavior, Binding};
use crate::config::SiteConfig;
use crate::SiteResult;

/// All scroll and frame driven animations of a page
#[derive(Debug)]
pub struct Animations {
    reveal: Option<Reveal>,
    counters: Option<Counters>,
    parallax: Option<Parallax>,
    gradient: Option<Gradient>,
}

impl Animations {
    pub fn bind(page: &mut Page, config: &SiteConfig) -> SiteResult<Binding<Self>> {
        let reveal = Reveal::bind(page, &config.reveal)?.resolved("reveal");
        let counters = Counters::bind(page, &config.counter)?.resolved("counters");
        let parallax = Parallax::bind(page, &config.parallax)?.resolved("parallax");
        let gradient = Gradient::bind(page, &config.gradient)?.resolved("gradient");
        let floating = apply_floating_delays(page, &config.floating)?;

        if reveal.is_none()
            && counters.is_none()
            && parallax.is_none()
            && gradient.is_none()
            && floating == 0
        {
            return Ok(Binding::Skipped("no animated elements"));
        }

        Ok(Binding::Bound(Self {
            reveal,
            counters,
            parallax,
            gradient,
        }))
    }

    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    pub fn counters(&self) -> Option<&Counters> {
        self.counters.as_ref()
    }
}

impl Behavior for Animations {
    fn name(&self) -> &'static str {
        "animations"
    }

    fn handle_event(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        if let Some(parallax) = &mut self.parallax {
            parallax.handle_event(page, event);
        }
        Dispatch::Continue
    }

    fn on_frame(&mut self, page: &mut Page) {
        if let Some(reveal) = &mut self.reveal {
            reveal.on_frame(page);
        }
        if let Some(counters) = &mut self.counters {
            counters.on_frame(page);
        }
        if let Some(gradient) = &mut self.gradient {
            gradient.on_frame(page);
        }
    }
}

/// `parseFloat`: longest numeric prefix after leading whitespace
pub(crate) fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let sign = if negative { -1.0 } else { 1.0 };

    if s[pos..].starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        frac_digits = &s[frac_start..end];
        if !int_digits.is_empty() || !frac_digits.is_empty() {
            pos = end;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let digits_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        if end > digits_start {
            exponent = format!("e{}", &s[pos + 1..end]);
        }
    }

    let normalized = format!(
        "{}.{}{}",
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        exponent
    );
    normalized.parse::<f64>().ok().map(|v| sign * v)
}

/// `parseInt(s, 10)`: optional sign and leading decimal digits
pub(crate) fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // Saturate instead of failing on absurdly long digit runs
    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Number to string the way script string interpolation prints it
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        // Shortest digits in exponent form, with an explicit `+` on large values
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{value}")
    }
}

/// Fractional digits needed to write any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// `Number.prototype.toFixed`: rounds the exact binary value, ties go away
/// from zero
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_number(value);
    }
    let digits = digits.min(EXACT_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| char::from(b)));
    }
    out
}
