//! Key arithmetic. Each function takes the neighbour keys found by a scan
//! and returns the new key; none of them touch storage.

/// Key of the first clip in an empty primary or group scope.
pub const FIRST_ORDER_KEY: f64 = 0.0;

/// Key of the first clip pinned into an empty sticky band.
pub const FIRST_STICKY_KEY: f64 = 1.0;

/// Key that places a clip above every other clip in its scope.
pub fn latest_after(max: Option<f64>) -> f64 {
    match max {
        Some(max) => max + 1.0,
        None => FIRST_ORDER_KEY,
    }
}

/// Key that moves a clip above its next-higher neighbour.
///
/// `above` is the next-higher key (R1), `two_above` the key above that (R2).
/// Returns `None` when there is no higher neighbour, i.e. the clip is already
/// topmost.
pub fn promote_between(above: Option<f64>, two_above: Option<f64>) -> Option<f64> {
    let above = above?;
    Some(match two_above {
        Some(two_above) => (above + two_above) / 2.0,
        None => above + 1.0,
    })
}

/// Sticky key that pins a clip above every pinned clip of its band.
pub fn sticky_top_after(max: Option<f64>) -> f64 {
    match max {
        Some(max) => nudge_off_zero(max + 1.0, 1.0),
        None => FIRST_STICKY_KEY,
    }
}

/// Sticky key that pins a clip below every pinned clip of its band.
pub fn sticky_bottom_before(min: Option<f64>) -> f64 {
    match min {
        Some(min) => nudge_off_zero(min - 1.0, -1.0),
        None => FIRST_STICKY_KEY,
    }
}

fn nudge_off_zero(key: f64, step: f64) -> f64 {
    if key == 0.0 {
        key + step
    } else {
        key
    }
}
