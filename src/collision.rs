//! Collision detection for the coin game
//!
//! The only collision the game needs is player-versus-coin, so this module is a
//! single pure AABB (Axis-Aligned Bounding Box) test.

use sdl2::rect::Rect;

/// Checks if two axis-aligned rectangles share any area.
///
/// Two rectangles overlap when they overlap on both the X and Y axes. The
/// comparisons are strict, so rectangles that only touch along an edge or at
/// a corner do NOT overlap.
///
/// # Example
///
/// ```rust
/// let player = Rect::new(10, 10, 50, 50);
/// let coin = Rect::new(40, 40, 50, 50);
///
/// if overlaps(&player, &coin) {
///     score += 1;
/// }
/// ```
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}
