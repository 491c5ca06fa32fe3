/// Share of the overall bar given to OCR; classification owns the rest.
pub const OCR_SHARE: u8 = 80;

pub const COMPLETE: u8 = 100;

fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
}

/// OCR engines report 0..1; the status line shows it as a whole percent.
pub fn percent(fraction: f64) -> u8 {
    (clamp_fraction(fraction) * 100.0).round() as u8
}

/// Position of the overall bar while OCR is `fraction` done.
pub fn overall_during_ocr(fraction: f64) -> u8 {
    (clamp_fraction(fraction) * OCR_SHARE as f64).round() as u8
}
