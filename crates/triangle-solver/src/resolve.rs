//! Trigonometric resolution: fill in the unknown slots for a classified
//! spec using the Law of Cosines and the Law of Sines.
//!
//! All trigonometry is done in radians; sides and angles are stored and
//! returned in the public degree convention, at full precision (rounding
//! happens at the presentation layer).

use triangle_types::{SolveCase, TriangleSpec, Vertex};

use crate::error::SolveError;
use crate::tolerance::LENGTH_EQ_TOL;
use crate::validate;

/// Fully resolved `(sides, angles)` in degrees, before rounding.
pub type Resolved = ([f64; 3], [f64; 3]);

/// Resolve all six values for a classified spec.
pub fn resolve(spec: &TriangleSpec, case: SolveCase) -> Result<Resolved, SolveError> {
    match case {
        SolveCase::Sss => resolve_sss(spec),
        SolveCase::Sas { sides, included } => resolve_sas(spec, sides, included),
        SolveCase::Asa { angles, included } => resolve_two_angles(spec, angles, included),
        SolveCase::Aas { angles, side } => resolve_two_angles(spec, angles, side),
        SolveCase::Ssa { opposite, adjacent } => resolve_ssa(spec, opposite, adjacent),
    }
}

/// SSS: each angle directly from the three sides via the Law of Cosines.
/// No propagation error between angles.
fn resolve_sss(spec: &TriangleSpec) -> Result<Resolved, SolveError> {
    let [Some(a), Some(b), Some(c)] = spec.sides else {
        return Err(SolveError::NoMatchingCase);
    };
    let sides = [a, b, c];
    validate::triangle_inequality(&sides)?;

    let mut angles = [0.0; 3];
    for v in Vertex::ALL {
        let (p, q) = v.others();
        let (sp, sq) = (sides[p.index()], sides[q.index()]);
        let sv = sides[v.index()];
        let cos = (sp * sp + sq * sq - sv * sv) / (2.0 * sp * sq);
        angles[v.index()] = cos.acos().to_degrees();
    }
    Ok((sides, angles))
}

/// SAS: third side via the Law of Cosines, then the two remaining angles
/// from the Law of Sines ratio established by the new side.
fn resolve_sas(
    spec: &TriangleSpec,
    (i, j): (Vertex, Vertex),
    k: Vertex,
) -> Result<Resolved, SolveError> {
    let (Some(si), Some(sj), Some(included)) = (spec.side(i), spec.side(j), spec.angle(k)) else {
        return Err(SolveError::NoMatchingCase);
    };
    let included_rad = included.to_radians();
    let sk = (si * si + sj * sj - 2.0 * si * sj * included_rad.cos()).sqrt();

    let sin_included = included_rad.sin();
    let mut sides = [0.0; 3];
    let mut angles = [0.0; 3];
    sides[i.index()] = si;
    sides[j.index()] = sj;
    sides[k.index()] = sk;
    angles[i.index()] = (si * sin_included / sk).asin().to_degrees();
    angles[j.index()] = (sj * sin_included / sk).asin().to_degrees();
    angles[k.index()] = included;

    // asin only returns the acute branch; a folded obtuse angle shows up as
    // a sum short of 180 and is rejected here.
    validate::angle_sum(&angles)?;
    Ok((sides, angles))
}

/// ASA and AAS share one resolution: the third angle closes the sum to 180,
/// then both unknown sides come from the Law of Sines ratio anchored at the
/// known side.
fn resolve_two_angles(
    spec: &TriangleSpec,
    (i, j): (Vertex, Vertex),
    side: Vertex,
) -> Result<Resolved, SolveError> {
    let (Some(ai), Some(aj), Some(known_side)) = (spec.angle(i), spec.angle(j), spec.side(side))
    else {
        return Err(SolveError::NoMatchingCase);
    };
    let k = Vertex::complement(i, j);
    let third = 180.0 - ai - aj;
    validate::positive_angle(third)?;

    let mut angles = [0.0; 3];
    angles[i.index()] = ai;
    angles[j.index()] = aj;
    angles[k.index()] = third;

    let ratio = known_side / angles[side.index()].to_radians().sin();
    let mut sides = [0.0; 3];
    for v in Vertex::ALL {
        sides[v.index()] = if v == side {
            known_side
        } else {
            ratio * angles[v.index()].to_radians().sin()
        };
    }
    Ok((sides, angles))
}

/// SSA, the ambiguous case: the known angle sits opposite one known side.
///
/// The height test decides solvability: with `h = adjacent · sin(angle)`,
/// no triangle exists when `h` exceeds the opposite side, exactly one
/// (right) triangle when they coincide, and otherwise the acute arcsine
/// branch is taken. The obtuse complement would yield a second valid
/// triangle; it is not produced.
fn resolve_ssa(
    spec: &TriangleSpec,
    opposite: Vertex,
    adjacent: Vertex,
) -> Result<Resolved, SolveError> {
    let (Some(opp), Some(adj), Some(known)) = (
        spec.side(opposite),
        spec.side(adjacent),
        spec.angle(opposite),
    ) else {
        return Err(SolveError::NoMatchingCase);
    };
    let k = Vertex::complement(opposite, adjacent);

    let height = adj * known.to_radians().sin();
    if height > opp {
        return Err(SolveError::NoSsaSolution);
    }

    // Angle opposite the adjacent side, by the Law of Sines.
    let derived = if (height - opp).abs() < LENGTH_EQ_TOL {
        90.0
    } else {
        (height / opp).asin().to_degrees()
    };
    let third = 180.0 - known - derived;

    let third_rad = third.to_radians();
    let sk = (opp * opp + adj * adj - 2.0 * opp * adj * third_rad.cos()).sqrt();

    let mut sides = [0.0; 3];
    let mut angles = [0.0; 3];
    sides[opposite.index()] = opp;
    sides[adjacent.index()] = adj;
    sides[k.index()] = sk;
    angles[opposite.index()] = known;
    angles[adjacent.index()] = derived;
    angles[k.index()] = third;
    Ok((sides, angles))
}
