//! Point mode: sampling the blended stack at one depth.

use crate::model::LayerProperties;

use super::aligner::InterpolatedLayer;

/// Properties at the requested depth, with the two bracketing layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSample {
    /// Interpolated values; `depth` is the requested depth in metres
    pub properties: LayerProperties,
    /// Deeper bracketing layer: the previous layer present in the stack,
    /// which skips canonical layers the node models leave out
    pub upper: &'static str,
    /// Shallower bracketing layer
    pub lower: &'static str,
}

/// Interpolate the stack at `depth_km`.
///
/// Canonical order runs from the centre outwards, so depths decrease along
/// the stack. A sample is produced wherever a layer sits at or above the
/// requested depth while its predecessor lies strictly below it. Returns an
/// empty vector when no pair brackets the depth.
pub fn sample_at_depth(layers: &[InterpolatedLayer], depth_km: f64) -> Vec<PointSample> {
    let target = depth_km * 1000.0;
    let mut samples = Vec::new();

    for pair in layers.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        let (top, bottom) = (lower.properties.depth, upper.properties.depth);

        if top <= target && bottom > target {
            let t = (target - bottom) / (top - bottom);
            let properties = LayerProperties {
                depth: target,
                ..upper.properties.lerp(lower.properties, t)
            };

            tracing::debug!(
                depth_km,
                upper = upper.name,
                lower = lower.name,
                fraction = t,
                "Depth bracketed"
            );
            samples.push(PointSample {
                properties,
                upper: upper.name,
                lower: lower.name,
            });
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(index: usize, name: &'static str, depth_km: f64, density: f64) -> InterpolatedLayer {
        InterpolatedLayer {
            index,
            name,
            properties: LayerProperties {
                depth: depth_km * 1000.0,
                density,
                pvel: density * 2.0,
                qshear: 100.0 * density,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_midpoint_between_layers() {
        let layers = [
            layer(147, "LID-BOTTOM", 50.0, 4.0),
            layer(148, "LID-TOP", 10.0, 3.0),
        ];
        let samples = sample_at_depth(&layers, 30.0);

        assert_eq!(samples.len(), 1);
        let s = &samples[0];
        assert_eq!(s.properties.density, 3.5);
        assert_eq!(s.properties.pvel, 7.0);
        assert_eq!(s.properties.depth, 30000.0);
        assert_eq!(s.upper, "LID-BOTTOM");
        assert_eq!(s.lower, "LID-TOP");
    }

    #[test]
    fn test_quarter_position() {
        let layers = [layer(0, "M70", 100.0, 4.0), layer(1, "M71", 60.0, 3.2)];
        let samples = sample_at_depth(&layers, 90.0);
        assert!((samples[0].properties.density - 3.8).abs() < 1e-12);
        assert!((samples[0].properties.qshear - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_depth_on_shallower_layer_is_included() {
        let layers = [layer(0, "CRUST1-BOTTOM", 20.0, 2.9), layer(1, "CRUST1-TOP", 5.0, 2.6)];
        let samples = sample_at_depth(&layers, 5.0);
        assert_eq!(samples.len(), 1);
        assert!((samples[0].properties.density - 2.6).abs() < 1e-12);
    }

    #[test]
    fn test_depth_on_deeper_layer_brackets_with_next_pair() {
        let layers = [
            layer(0, "A", 40.0, 4.0),
            layer(1, "B", 20.0, 3.0),
            layer(2, "C", 10.0, 2.0),
        ];
        // 20 km equals B: the A/B pair includes it, B/C does not (B is not deeper).
        let samples = sample_at_depth(&layers, 20.0);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].upper, "A");
        assert_eq!(samples[0].lower, "B");
        assert!((samples[0].properties.density - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_upper_tag_is_previous_present_layer() {
        // CRUST2-BOTTOM, CRUST2-TOP and CRUST1-BOTTOM are absent from this stack
        let layers = [
            layer(149, "CRUST3-BOTTOM", 40.0, 3.0),
            layer(154, "CRUST1-TOP", 10.0, 2.0),
        ];
        let samples = sample_at_depth(&layers, 20.0);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].upper, "CRUST3-BOTTOM");
        assert_eq!(samples[0].lower, "CRUST1-TOP");
        assert!((samples[0].properties.density - 2.0 - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_deeper_than_stack_yields_nothing() {
        let layers = [layer(0, "IC0", 6371.0, 13.0), layer(1, "WATER-TOP", 0.0, 1.0)];
        assert!(sample_at_depth(&layers, 7000.0).is_empty());
    }

    #[test]
    fn test_above_surface_yields_nothing() {
        let layers = [layer(0, "IC0", 6371.0, 13.0), layer(1, "WATER-TOP", 0.0, 1.0)];
        assert!(sample_at_depth(&layers, -1.0).is_empty());
    }

    #[test]
    fn test_single_layer_yields_nothing() {
        assert!(sample_at_depth(&[layer(0, "IC0", 6371.0, 13.0)], 6000.0).is_empty());
        assert!(sample_at_depth(&[], 10.0).is_empty());
    }
}
