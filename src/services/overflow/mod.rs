//! Overflow layout for size-constrained item lists.
//!
//! Given items stacked inside a container of limited extent, decide how many
//! trailing items do not fit, hide them, and report the count so a
//! "+N more" indicator can be shown in their place.

/// A laid-out container the overflow algorithm can measure and adjust.
///
/// `scroll_extent` is the extent the current visible content needs and
/// `client_extent` the extent actually available.
pub trait OverflowHost {
    fn item_count(&self) -> usize;
    fn scroll_extent(&self) -> f32;
    fn client_extent(&self) -> f32;
    fn set_item_hidden(&mut self, index: usize, hidden: bool);
    fn set_indicator_visible(&mut self, visible: bool);
}

/// Measurements closer than this count as fitting
const FIT_TOLERANCE: f32 = 0.01;

fn fits<H: OverflowHost + ?Sized>(host: &H) -> bool {
    host.scroll_extent() <= host.client_extent() + FIT_TOLERANCE
}

/// Run the full reset-and-measure pass and return the number of trailing
/// items that had to be hidden.
///
/// Every item is made visible and the indicator hidden first, so the result
/// never depends on the state a previous pass left behind.
pub fn layout_overflow<H: OverflowHost + ?Sized>(host: &mut H) -> usize {
    let count = host.item_count();

    host.set_indicator_visible(false);
    for index in 0..count {
        host.set_item_hidden(index, false);
    }

    let mut overflow = 0;
    for index in (0..count).rev() {
        if fits(host) {
            break;
        }
        overflow = count - index;
        host.set_item_hidden(index, true);
        host.set_indicator_visible(true);
    }
    overflow
}

/// Vertical stack of measured items with an optional "+N more" row.
///
/// An `indicator_extent` of zero models an indicator drawn outside the
/// container; a positive extent reserves room for it inside.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedColumn {
    item_extents: Vec<f32>,
    hidden: Vec<bool>,
    gap: f32,
    indicator_extent: f32,
    indicator_visible: bool,
    client_extent: f32,
}

impl StackedColumn {
    pub fn new(client_extent: f32, gap: f32, indicator_extent: f32) -> Self {
        Self {
            item_extents: Vec::new(),
            hidden: Vec::new(),
            gap: gap.max(0.0),
            indicator_extent: indicator_extent.max(0.0),
            indicator_visible: false,
            client_extent: client_extent.max(0.0),
        }
    }

    pub fn with_items(mut self, extents: impl IntoIterator<Item = f32>) -> Self {
        self.set_items(extents.into_iter().collect());
        self
    }

    pub fn set_items(&mut self, extents: Vec<f32>) {
        self.hidden = vec![false; extents.len()];
        self.item_extents = extents;
        self.indicator_visible = false;
    }

    pub fn set_client_extent(&mut self, extent: f32) {
        self.client_extent = extent.max(0.0);
    }

    pub fn item_extents(&self) -> &[f32] {
        &self.item_extents
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.hidden.iter().filter(|hidden| !**hidden).count()
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }
}

impl OverflowHost for StackedColumn {
    fn item_count(&self) -> usize {
        self.item_extents.len()
    }

    fn scroll_extent(&self) -> f32 {
        let mut rows = self
            .item_extents
            .iter()
            .zip(&self.hidden)
            .filter(|(_, hidden)| !**hidden)
            .map(|(extent, _)| *extent)
            .collect::<Vec<_>>();
        if self.indicator_visible && self.indicator_extent > 0.0 {
            rows.push(self.indicator_extent);
        }

        let gaps = rows.len().saturating_sub(1) as f32 * self.gap;
        rows.iter().sum::<f32>() + gaps
    }

    fn client_extent(&self) -> f32 {
        self.client_extent
    }

    fn set_item_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slot) = self.hidden.get_mut(index) {
            *slot = hidden;
        }
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        self.indicator_visible = visible;
    }
}

/// Keeps a `StackedColumn` laid out as its items and size change.
///
/// `set_items` and `observe_resize` are the change notifications; either one
/// re-runs `layout_overflow` when something actually changed, so repeated
/// notifications with the same input leave the result untouched.
#[derive(Debug, Clone)]
pub struct OverflowContainer<K> {
    keys: Vec<K>,
    column: StackedColumn,
    overflow: usize,
}

impl<K: PartialEq> OverflowContainer<K> {
    pub fn new(gap: f32, indicator_extent: f32) -> Self {
        Self {
            keys: Vec::new(),
            column: StackedColumn::new(0.0, gap, indicator_extent),
            overflow: 0,
        }
    }

    /// Replace the item list (key plus measured extent per item)
    pub fn set_items(&mut self, items: impl IntoIterator<Item = (K, f32)>) -> usize {
        let (keys, extents): (Vec<K>, Vec<f32>) = items.into_iter().unzip();
        if keys == self.keys && extents.as_slice() == self.column.item_extents() {
            return self.overflow;
        }

        self.keys = keys;
        self.column.set_items(extents);
        self.relayout()
    }

    /// Resize notification for the container's available extent
    pub fn observe_resize(&mut self, client_extent: f32) -> usize {
        if (self.column.client_extent() - client_extent.max(0.0)).abs() <= f32::EPSILON {
            return self.overflow;
        }

        self.column.set_client_extent(client_extent);
        self.relayout()
    }

    pub fn overflow(&self) -> usize {
        self.overflow
    }

    pub fn indicator_visible(&self) -> bool {
        self.column.indicator_visible()
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.column.is_hidden(index)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Keys of the items still shown, in order
    pub fn visible_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.column.is_hidden(*index))
            .map(|(_, key)| key)
    }

    pub fn column(&self) -> &StackedColumn {
        &self.column
    }

    fn relayout(&mut self) -> usize {
        self.overflow = layout_overflow(&mut self.column);
        log::trace!(
            "Overflow layout: {} items, client extent {:.1}, {} hidden",
            self.keys.len(),
            self.column.client_extent(),
            self.overflow
        );
        self.overflow
    }
}
