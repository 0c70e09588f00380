//! Staggered float animation for `.floating-element`

use terro_runtime::Page;

use super::format_number;
use crate::config::FloatingConfig;
use crate::SiteResult;

/// Give each floating element an `animation-delay` of `index * step` seconds.
/// Returns how many elements were touched.
pub fn apply_floating_delays(page: &mut Page, config: &FloatingConfig) -> SiteResult<usize> {
    let doc = page.document_mut();
    let elements = doc.query_selector_all(".floating-element")?;
    for (index, &el) in elements.iter().enumerate() {
        let delay = format!("{}s", format_number(index as f64 * config.delay_step_secs));
        doc.set_style_property(el, "animation-delay", &delay);
    }
    Ok(elements.len())
}
