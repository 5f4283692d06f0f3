use tracing::debug;

use crate::config::ReconstructOptions;
use crate::error::{Result, TopologyError};
use crate::geometry::Curve;

use super::reconstruct::assemble_chains;

/// A curve placed in a joined group, with the direction it is traversed in.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedCurve<C> {
    pub curve: C,
    /// `false` when the curve runs end to start within the group.
    pub forward: bool,
    /// Index of the curve in the caller's input.
    pub source: usize,
}

/// Two or more curves joined end to end, in path order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyCurve<C> {
    pub curves: Vec<JoinedCurve<C>>,
    pub closed: bool,
}

/// Output of [`GroupCurves`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGroups<C> {
    /// Groups of at least two connected curves.
    pub polycurves: Vec<PolyCurve<C>>,
    /// Curves not connected to any other, in discovery order.
    pub ungrouped: Vec<C>,
}

/// Groups curves that share endpoints into connected chains.
///
/// Only the endpoints of each curve are inspected; the curves themselves are
/// handed back untouched inside the groups.
#[derive(Debug, Clone)]
pub struct GroupCurves<C> {
    curves: Vec<C>,
    options: ReconstructOptions,
}

impl<C: Curve> GroupCurves<C> {
    /// Creates a new grouping with default options.
    #[must_use]
    pub fn new(curves: Vec<C>) -> Self {
        Self {
            curves,
            options: ReconstructOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: ReconstructOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the grouping, consuming the input curves.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for fewer than 2 curves or a
    /// curve whose endpoints coincide within tolerance; propagates curve
    /// evaluation failures.
    pub fn execute(self) -> Result<CurveGroups<C>> {
        let endpoints = self
            .curves
            .iter()
            .map(|c| Ok((c.start_point()?, c.end_point()?)))
            .collect::<Result<Vec<_>>>()?;
        let (graph, chains) = assemble_chains(endpoints, self.curves.len(), &self.options)?;

        let mut slots: Vec<Option<C>> = self.curves.into_iter().map(Some).collect();
        let mut take = |source: usize| {
            slots
                .get_mut(source)
                .and_then(Option::take)
                .ok_or_else(|| TopologyError::EntityNotFound(format!("curve {source}")))
        };

        let mut polycurves = Vec::new();
        let mut ungrouped = Vec::new();
        for chain in chains.values() {
            if let [single] = chain.edges.as_slice() {
                ungrouped.push(take(graph.edge(single.edge)?.source)?);
                continue;
            }
            let mut curves = Vec::with_capacity(chain.len());
            for oriented in &chain.edges {
                let source = graph.edge(oriented.edge)?.source;
                curves.push(JoinedCurve {
                    curve: take(source)?,
                    forward: oriented.forward,
                    source,
                });
            }
            polycurves.push(PolyCurve {
                curves,
                closed: chain.is_closed,
            });
        }

        debug!(
            polycurves = polycurves.len(),
            ungrouped = ungrouped.len(),
            "grouped curves"
        );
        Ok(CurveGroups {
            polycurves,
            ungrouped,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::geometry::{Arc, Segment};
    use crate::math::{Point3, Vector3};

    /// Test handle mixing straight and curved pieces.
    #[derive(Debug, Clone, PartialEq)]
    enum Piece {
        Line(Segment),
        Arc(Arc),
    }

    impl Curve for Piece {
        fn evaluate(&self, t: f64) -> Result<Point3> {
            match self {
                Self::Line(s) => s.evaluate(t),
                Self::Arc(a) => a.evaluate(t),
            }
        }

        fn domain(&self) -> crate::geometry::CurveDomain {
            match self {
                Self::Line(s) => s.domain(),
                Self::Arc(a) => a.domain(),
            }
        }
    }

    fn half_circle(start_angle: f64) -> Arc {
        Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), start_angle, start_angle + PI)
            .unwrap()
    }

    #[test]
    fn two_half_circles_form_a_closed_group() {
        let groups = GroupCurves::new(vec![half_circle(0.0), half_circle(PI)])
            .execute()
            .unwrap();
        assert_eq!(groups.polycurves.len(), 1);
        assert!(groups.ungrouped.is_empty());
        let group = &groups.polycurves[0];
        assert_eq!(group.curves.len(), 2);
        // Two curves between the same pair of vertices still close.
        assert!(group.closed);
    }

    #[test]
    fn mixed_pieces_and_stray_curve() {
        let pieces = vec![
            Piece::Line(Segment::from_coords([1.0, 0.0, 0.0], [3.0, 0.0, 0.0])),
            Piece::Arc(half_circle(0.0)),
            Piece::Line(Segment::from_coords([10.0, 0.0, 0.0], [11.0, 0.0, 0.0])),
        ];
        let groups = GroupCurves::new(pieces).execute().unwrap();
        assert_eq!(groups.polycurves.len(), 1);
        assert_eq!(groups.ungrouped.len(), 1);
        assert!(!groups.polycurves[0].closed);

        let mut sources: Vec<usize> =
            groups.polycurves[0].curves.iter().map(|c| c.source).collect();
        sources.sort_unstable();
        assert_eq!(sources, vec![0, 1]);
        assert!(matches!(groups.ungrouped[0], Piece::Line(_)));
    }

    #[test]
    fn orientation_flags_follow_the_path() {
        // Second segment points back toward the shared vertex.
        let groups = GroupCurves::new(vec![
            Segment::from_coords([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            Segment::from_coords([2.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        ])
        .execute()
        .unwrap();
        let curves = &groups.polycurves[0].curves;
        assert_eq!(curves.len(), 2);
        assert_ne!(curves[0].forward, curves[1].forward);
    }

    #[test]
    fn rejects_single_curve() {
        let err = GroupCurves::new(vec![half_circle(0.0)]).execute().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn rejects_full_circle_as_degenerate() {
        let full = Arc::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x(), 0.0, 2.0 * PI)
            .unwrap();
        let err = GroupCurves::new(vec![full, half_circle(0.0)])
            .execute()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
