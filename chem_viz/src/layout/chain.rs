//! Zigzag backbones for polymer chains.

use bevy::prelude::*;

/// Zigzag backbone centred on the origin along X; even members sit at `+amplitude`.
pub fn zigzag_chain(count: usize, spacing: f32, amplitude: f32) -> Vec<Vec3> {
    let half_span = count.saturating_sub(1) as f32 * spacing / 2.0;
    (0..count)
        .map(|i| {
            let y = if i % 2 == 0 { amplitude } else { -amplitude };
            Vec3::new(i as f32 * spacing - half_span, y, 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_centred_and_alternating() {
        let chain = zigzag_chain(5, 1.0, 0.3);
        assert_eq!(chain[0], Vec3::new(-2.0, 0.3, 0.0));
        assert_eq!(chain[4], Vec3::new(2.0, 0.3, 0.0));
        assert_eq!(chain[1].y, -0.3);
        let sum: Vec3 = chain.iter().copied().sum();
        assert!(sum.x.abs() < 1e-5);
    }
}
