use crate::amav::{AccumSeries, Block, MavSeries};

/// Trailing contiguous run of defined MAV years.
pub fn select_block(mav: &MavSeries) -> Option<Block> {
    let end = mav.last_year()?;
    let mut start = end;
    while mav.points.contains_key(&(start - 1)) {
        start -= 1;
    }
    Some(Block { start, end })
}

/// Running sum of MAV over the block, in increasing year order.
///
/// Every block year has a defined MAV by construction; a missing year is
/// treated as a zero step so the series stays aligned with the block.
pub fn integrate(mav: &MavSeries, block: Block) -> AccumSeries {
    let mut values = Vec::with_capacity(block.len());
    let mut acc = 0.0;
    for year in block.years() {
        acc += mav.get(year).unwrap_or(0.0);
        values.push(acc);
    }
    AccumSeries {
        start: block.start,
        values,
    }
}
