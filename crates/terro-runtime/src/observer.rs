//! Intersection Observer
//!
//! Observe element visibility against the (margin-adjusted) viewport.
//! Checks run once per frame from the owning behavior.

use std::time::Duration;

use terro_dom::{DOMRect, NodeId};

use crate::{Page, RuntimeError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    fn parse(token: &str) -> Option<Self> {
        if let Some(px) = token.strip_suffix("px") {
            return px.parse().ok().map(MarginLength::Px);
        }
        if let Some(pct) = token.strip_suffix('%') {
            return pct.parse().ok().map(MarginLength::Percent);
        }
        match token.parse::<f64>() {
            Ok(v) if v == 0.0 => Some(MarginLength::Px(0.0)),
            _ => None,
        }
    }

    fn resolve(self, basis: f64) -> f64 {
        match self {
            MarginLength::Px(v) => v,
            MarginLength::Percent(p) => basis * p / 100.0,
        }
    }
}

/// `rootMargin` in CSS margin shorthand order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    top: MarginLength,
    right: MarginLength,
    bottom: MarginLength,
    left: MarginLength,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: MarginLength::Px(0.0),
        right: MarginLength::Px(0.0),
        bottom: MarginLength::Px(0.0),
        left: MarginLength::Px(0.0),
    };

    /// Parse one to four lengths (`px`, `%` or a bare `0`)
    pub fn parse(input: &str) -> Result<Self, RuntimeError> {
        let values = input
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RuntimeError::InvalidRootMargin(input.to_string()))?;

        let (top, right, bottom, left) = match values.as_slice() {
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(RuntimeError::InvalidRootMargin(input.to_string())),
        };
        Ok(Self { top, right, bottom, left })
    }

    /// Grow (or shrink, for negative margins) the root rectangle
    pub fn apply(&self, root: DOMRect) -> DOMRect {
        let top = self.top.resolve(root.height);
        let bottom = self.bottom.resolve(root.height);
        let left = self.left.resolve(root.width);
        let right = self.right.resolve(root.width);
        DOMRect::new(
            root.x - left,
            root.y - top,
            (root.width + left + right).max(0.0),
            (root.height + top + bottom).max(0.0),
        )
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Intersection observer options
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionObserverOptions {
    pub root_margin: RootMargin,
    /// Sorted ratios in `0.0..=1.0`
    pub thresholds: Vec<f64>,
}

impl IntersectionObserverOptions {
    /// Validate the margin and thresholds; thresholds are sorted
    pub fn new(root_margin: &str, thresholds: &[f64]) -> Result<Self, RuntimeError> {
        if let Some(bad) = thresholds.iter().find(|t| !(0.0..=1.0).contains(*t)) {
            return Err(RuntimeError::InvalidThreshold(*bad));
        }
        let mut thresholds = thresholds.to_vec();
        if thresholds.is_empty() {
            thresholds.push(0.0);
        }
        thresholds.sort_by(f64::total_cmp);
        Ok(Self {
            root_margin: RootMargin::parse(root_margin)?,
            thresholds,
        })
    }

    fn min_threshold(&self) -> f64 {
        self.thresholds.first().copied().unwrap_or(0.0)
    }
}

impl Default for IntersectionObserverOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::ZERO,
            thresholds: vec![0.0],
        }
    }
}

/// Intersection observer entry
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionObserverEntry {
    pub target: NodeId,
    pub bounding_client_rect: DOMRect,
    pub intersection_rect: DOMRect,
    pub root_bounds: DOMRect,
    pub intersection_ratio: f64,
    /// Intersecting the root with at least the smallest threshold visible
    pub is_intersecting: bool,
    pub time: Duration,
}

/// Last reported state of an observed target
type Crossing = (bool, usize);

/// Intersection observer
#[derive(Debug)]
pub struct IntersectionObserver {
    options: IntersectionObserverOptions,
    observed: Vec<(NodeId, Option<Crossing>)>,
}

impl IntersectionObserver {
    /// Observer with nothing observed yet
    pub fn new(options: IntersectionObserverOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    /// Start watching `target`; observing twice is a no-op
    pub fn observe(&mut self, target: NodeId) {
        if !self.is_observing(target) {
            self.observed.push((target, None));
        }
    }

    /// Stop watching `target`
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.retain(|(id, _)| *id != target);
    }

    /// Whether `target` is watched
    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.iter().any(|(id, _)| *id == target)
    }

    /// Number of watched targets
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Whether nothing is watched
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Compute intersections for every observed target.
    ///
    /// Returns an entry for targets seen for the first time and for
    /// targets that crossed a threshold since the previous check.
    pub fn check(&mut self, page: &Page) -> Vec<IntersectionObserverEntry> {
        let root = self.options.root_margin.apply(page.viewport_rect());
        let min_threshold = self.options.min_threshold();
        let mut entries = Vec::new();

        for (target, last) in &mut self.observed {
            let Some(rect) = page.bounding_client_rect(*target) else {
                continue;
            };

            let intersection = rect.intersection(&root);
            let ratio = match intersection {
                None => 0.0,
                Some(_) if rect.area() == 0.0 => 1.0,
                Some(i) => (i.area() / rect.area()).min(1.0),
            };
            let is_intersecting = intersection.is_some() && ratio >= min_threshold;
            let index = self.options.thresholds.iter().filter(|t| **t <= ratio).count();
            let crossing = (is_intersecting, if is_intersecting { index } else { 0 });

            if *last != Some(crossing) {
                *last = Some(crossing);
                entries.push(IntersectionObserverEntry {
                    target: *target,
                    bounding_client_rect: rect,
                    intersection_rect: intersection.unwrap_or_default(),
                    root_bounds: root,
                    intersection_ratio: ratio,
                    is_intersecting,
                    time: page.now(),
                });
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terro_dom::Document;

    fn page_with_box(y: f64, height: f64) -> (Page, NodeId) {
        let mut doc = Document::new("https://terro.ai/");
        let el = doc.tree.create_element("div");
        doc.tree.append_child(doc.body(), el);
        doc.set_layout(el, DOMRect::new(0.0, y, 400.0, height));
        (Page::new(doc, 1280.0, 800.0), el)
    }

    #[test]
    fn test_root_margin_parse() {
        let m = RootMargin::parse("0px 0px -50px 0px").unwrap();
        let root = m.apply(DOMRect::new(0.0, 0.0, 1280.0, 800.0));
        assert_eq!(root, DOMRect::new(0.0, 0.0, 1280.0, 750.0));

        let pct = RootMargin::parse("10%").unwrap();
        let root = pct.apply(DOMRect::new(0.0, 0.0, 1000.0, 500.0));
        assert_eq!(root, DOMRect::new(-100.0, -50.0, 1200.0, 600.0));

        assert!(RootMargin::parse("5em").is_err());
        assert!(RootMargin::parse("1px 2px 3px 4px 5px").is_err());
        assert!(RootMargin::parse("").is_err());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(IntersectionObserverOptions::new("0px", &[1.5]).is_err());
        let opts = IntersectionObserverOptions::new("0px", &[0.5, 0.1]).unwrap();
        assert_eq!(opts.thresholds, vec![0.1, 0.5]);
    }

    #[test]
    fn test_threshold_crossing() {
        let (mut page, el) = page_with_box(1000.0, 200.0);
        let opts = IntersectionObserverOptions::new("0px 0px -50px 0px", &[0.1]).unwrap();
        let mut observer = IntersectionObserver::new(opts);
        observer.observe(el);

        // Initial observation always reports
        let entries = observer.check(&page);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);

        // No change, no entry
        assert!(observer.check(&page).is_empty());

        // 10px of 200 visible inside the shrunk root: 5%, below threshold
        page.set_scroll_y(260.0);
        assert!(observer.check(&page).is_empty());

        // 40px visible: 20%
        page.set_scroll_y(290.0);
        let entries = observer.check(&page);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
        assert!((entries[0].intersection_ratio - 0.2).abs() < 1e-9);

        observer.unobserve(el);
        assert!(observer.is_empty());
    }

    #[test]
    fn test_zero_area_target() {
        let (page, el) = page_with_box(100.0, 0.0);
        let mut observer = IntersectionObserver::new(IntersectionObserverOptions::default());
        observer.observe(el);
        let entries = observer.check(&page);
        assert!(entries[0].is_intersecting);
        assert_eq!(entries[0].intersection_ratio, 1.0);
    }
}
