//! Instant scramble applied before the reveal starts

use crate::algorithm::moves::ParamsMove;
use crate::algorithm::sequencer::rotate_layer;
use crate::io::error::Result;
use crate::spatial::layer::Pivots;
use crate::spatial::store::TransformStore;

/// Apply the first `count` moves of `params` to `cube` as full quarter turns
///
/// Advances `current_move` to `count` and returns `true`. A list shorter than
/// `count` is left untouched with `current_move` at 0 and returns `false`; its
/// moves are all played later by the sequencer.
///
/// # Errors
///
/// Propagates store and layer lookup errors
pub fn apply_preroll(
    store: &mut TransformStore,
    pivots: &Pivots,
    cube: usize,
    params: &mut ParamsMove,
    count: usize,
) -> Result<bool> {
    if params.moves_length() < count {
        return Ok(false);
    }

    for _ in 0..count {
        let Some(current) = params.current() else {
            break;
        };
        rotate_layer(store, pivots, cube, current, current.angle())?;
        params.advance();
    }

    Ok(true)
}
