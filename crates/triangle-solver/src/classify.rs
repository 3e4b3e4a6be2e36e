//! Case classification: which solvable configuration the known slots form.

use triangle_types::{SolveCase, TriangleSpec, Vertex};

use crate::error::SolveError;

/// Vertex pairs in classifier precedence order.
const PAIRS: [(Vertex, Vertex); 3] = [
    (Vertex::A, Vertex::B),
    (Vertex::B, Vertex::C),
    (Vertex::A, Vertex::C),
];

/// Determine which solvable configuration applies to a spec.
///
/// Patterns are tested in precedence order SSS, SAS, ASA, AAS, SSA, over
/// vertex pairs in a fixed order. For a spec with exactly three known values
/// the patterns are mutually exclusive; an over-determined spec resolves to
/// the first match.
pub fn classify(spec: &TriangleSpec) -> Result<SolveCase, SolveError> {
    let known_sides = spec.known_sides();
    let known_angles = spec.known_angles();
    if known_sides + known_angles < 3 || known_sides == 0 {
        return Err(SolveError::Insufficient);
    }

    if known_sides == 3 {
        return Ok(SolveCase::Sss);
    }

    // SAS: two sides with the angle between them.
    for (i, j) in PAIRS {
        let k = Vertex::complement(i, j);
        if spec.side(i).is_some() && spec.side(j).is_some() && spec.angle(k).is_some() {
            return Ok(SolveCase::Sas {
                sides: (i, j),
                included: k,
            });
        }
    }

    // ASA: two angles with the side between them.
    for (i, j) in PAIRS {
        let k = Vertex::complement(i, j);
        if spec.angle(i).is_some() && spec.angle(j).is_some() && spec.side(k).is_some() {
            return Ok(SolveCase::Asa {
                angles: (i, j),
                included: k,
            });
        }
    }

    // AAS: two angles with a side under one of them.
    for (i, j) in PAIRS {
        if spec.angle(i).is_some() && spec.angle(j).is_some() {
            for side in [i, j] {
                if spec.side(side).is_some() {
                    return Ok(SolveCase::Aas {
                        angles: (i, j),
                        side,
                    });
                }
            }
        }
    }

    // SSA: two sides with the angle opposite one of them.
    for (i, j) in PAIRS {
        if spec.side(i).is_some() && spec.side(j).is_some() {
            for (opposite, adjacent) in [(i, j), (j, i)] {
                if spec.angle(opposite).is_some() {
                    return Ok(SolveCase::Ssa { opposite, adjacent });
                }
            }
        }
    }

    Err(SolveError::NoMatchingCase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_values_is_insufficient() {
        let spec = TriangleSpec::new()
            .with_side(Vertex::A, 3.0)
            .with_side(Vertex::B, 4.0);
        assert_eq!(classify(&spec), Err(SolveError::Insufficient));
    }

    #[test]
    fn test_no_sides_is_insufficient() {
        let spec = TriangleSpec::new()
            .with_angle(Vertex::A, 60.0)
            .with_angle(Vertex::B, 60.0)
            .with_angle(Vertex::C, 60.0);
        assert_eq!(classify(&spec), Err(SolveError::Insufficient));
    }

    #[test]
    fn test_three_sides_is_sss() {
        let spec = TriangleSpec::from_sides(3.0, 4.0, 5.0);
        assert_eq!(classify(&spec), Ok(SolveCase::Sss));
    }

    #[test]
    fn test_included_angle_is_sas() {
        let spec = TriangleSpec::new()
            .with_side(Vertex::A, 3.0)
            .with_side(Vertex::B, 4.0)
            .with_angle(Vertex::C, 60.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Sas {
                sides: (Vertex::A, Vertex::B),
                included: Vertex::C,
            })
        );
    }

    #[test]
    fn test_included_side_is_asa() {
        let spec = TriangleSpec::new()
            .with_angle(Vertex::A, 50.0)
            .with_angle(Vertex::B, 60.0)
            .with_side(Vertex::C, 7.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Asa {
                angles: (Vertex::A, Vertex::B),
                included: Vertex::C,
            })
        );
    }

    #[test]
    fn test_side_under_known_angle_is_aas() {
        let spec = TriangleSpec::new()
            .with_angle(Vertex::A, 50.0)
            .with_angle(Vertex::B, 60.0)
            .with_side(Vertex::A, 7.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Aas {
                angles: (Vertex::A, Vertex::B),
                side: Vertex::A,
            })
        );
    }

    #[test]
    fn test_aas_matches_side_under_second_angle() {
        let spec = TriangleSpec::new()
            .with_angle(Vertex::A, 50.0)
            .with_angle(Vertex::B, 60.0)
            .with_side(Vertex::B, 7.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Aas {
                angles: (Vertex::A, Vertex::B),
                side: Vertex::B,
            })
        );
    }

    #[test]
    fn test_opposite_angle_is_ssa() {
        let spec = TriangleSpec::new()
            .with_side(Vertex::A, 10.0)
            .with_side(Vertex::B, 3.0)
            .with_angle(Vertex::A, 30.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Ssa {
                opposite: Vertex::A,
                adjacent: Vertex::B,
            })
        );
    }

    #[test]
    fn test_ssa_matches_angle_opposite_second_side() {
        let spec = TriangleSpec::new()
            .with_side(Vertex::A, 3.0)
            .with_side(Vertex::B, 10.0)
            .with_angle(Vertex::B, 30.0);
        assert_eq!(
            classify(&spec),
            Ok(SolveCase::Ssa {
                opposite: Vertex::B,
                adjacent: Vertex::A,
            })
        );
    }

    #[test]
    fn test_overdetermined_spec_takes_first_match() {
        // Two sides plus both an included and an opposite angle: SAS wins.
        let spec = TriangleSpec::new()
            .with_side(Vertex::A, 3.0)
            .with_side(Vertex::B, 4.0)
            .with_angle(Vertex::A, 36.8699)
            .with_angle(Vertex::C, 90.0);
        assert!(matches!(classify(&spec), Ok(SolveCase::Sas { .. })));
    }
}
