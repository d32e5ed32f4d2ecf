//! Largest-remainder (Hare-Niemeyer) bead apportionment.
//!
//! Converts a five-way percentage target into exactly `n` bead colors:
//! floor shares first, then one extra unit to the categories with the
//! largest fractional remainders, then shuffle, then placeholder padding
//! for any shortfall the ratio itself cannot cover.

use std::cmp::Ordering;

use rand::Rng;

use crate::config::constants::PLACEHOLDER_COLOR;
use crate::models::{Bead, Bracelet, Element, ElementColorMap, ElementRatio};
use crate::utils::fisher_yates;

/// Apportion with the default RNG. See [`apportion_with`].
pub fn apportion(n: usize, goal: &ElementRatio, colors: &ElementColorMap) -> Vec<String> {
    apportion_with(n, goal, colors, &mut rand::thread_rng())
}

/// Produce exactly `n` colors approximating `goal`.
///
/// Out-of-domain ratios are never rejected: negative values count as zero,
/// a total below 100 pads the tail with the placeholder color, and a total
/// above 100 is capped at `n` in remainder-descending order.
pub fn apportion_with(
    n: usize,
    goal: &ElementRatio,
    colors: &ElementColorMap,
    rng: &mut impl Rng,
) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    // 1. Floor shares and fractional remainders per category.
    let mut base = [0usize; 5];
    let mut remainder = [0f64; 5];
    for (slot, elem) in Element::ALL.iter().enumerate() {
        let exact = (goal.get(*elem) * n as f64 / 100.0).max(0.0);
        let floor = exact.floor();
        base[slot] = floor as usize;
        remainder[slot] = exact - floor;
    }

    // 2. Remainder-descending index order. The sort is stable, so ties keep
    //    category-definition order; tests pin this down.
    let mut order: Vec<usize> = (0..5).collect();
    order.sort_by(|a, b| {
        remainder[*b]
            .partial_cmp(&remainder[*a])
            .unwrap_or(Ordering::Equal)
    });

    let total_base: usize = base.iter().sum();

    if total_base > n {
        // Ratios totalling above 100 would over-emit. Re-grant the floor
        // shares in remainder order, capping the cumulative total at n.
        let mut left = n;
        let mut capped = [0usize; 5];
        for &slot in &order {
            let take = base[slot].min(left);
            capped[slot] = take;
            left -= take;
        }
        base = capped;
    } else {
        // 3. Hand the deficit out, one unit per category with an actual
        //    fractional claim, largest remainder first. Whatever no category
        //    can claim is left for the placeholder padding below.
        let mut deficit = n - total_base;
        for &slot in &order {
            if deficit == 0 {
                break;
            }
            if remainder[slot] > 0.0 {
                base[slot] += 1;
                deficit -= 1;
            }
        }
    }

    // 4. Emit runs in category-definition order (NOT remainder order), then
    //    shuffle the whole sequence.
    let mut out: Vec<String> = Vec::with_capacity(n);
    for (slot, elem) in Element::ALL.iter().enumerate() {
        for _ in 0..base[slot] {
            out.push(colors.get(*elem).to_string());
        }
    }
    fisher_yates(&mut out, rng);

    // 5. Pad the tail up to n; never truncate.
    while out.len() < n {
        out.push(PLACEHOLDER_COLOR.to_string());
    }
    out
}

/// Apportion and wrap each color in a fresh [`Bead`] identity.
pub fn build_bracelet(n: usize, goal: &ElementRatio, colors: &ElementColorMap) -> Bracelet {
    apportion(n, goal, colors).into_iter().map(Bead::new).collect()
}
