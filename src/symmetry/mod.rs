// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Schützenberger involution on all three representations.
//!
//! - Triangulation: every edge is reversed. The poles swap, each face keeps
//!   its rotation and changes color.
//! - Prograph: the mirror image, see [`PcProgram::mirrored`].
//! - Tableau: evacuation, see [`Tableau::schutzenberger`].
//!
//! [`apply`] computes the new triangulation and derives the other two from it,
//! then checks them against the direct transforms of the old ones. The two
//! routes must agree exactly.
//!
//! [`check_symmetry`] classifies a tableau against its image, so that the
//! involution orbits can be enumerated once each.

use tracing::{debug, warn};

use crate::errors::ConsistencyError;
use crate::prograph::PcProgram;
use crate::tableau::{LabelledTableau, Tableau, TableauBuilder};
use crate::triangulation::Triangulation;

/// All three representations after the involution.
#[derive(Debug, Clone)]
pub struct Involution {
    pub triangulation: Triangulation,
    pub prograph: PcProgram,
    pub tableau: LabelledTableau,
}

pub fn apply(
    triangulation: &Triangulation,
    prograph: &PcProgram,
    tableau: &Tableau,
) -> Result<Involution, ConsistencyError> {
    let mut reversed = triangulation.clone();
    reversed.reverse_orientation();

    let rebuilt = PcProgram::build(&reversed)?;
    if rebuilt != prograph.mirrored() {
        warn!("rebuilt prograph is not the mirror image");
        return Err(ConsistencyError::Involution("prographs"));
    }
    let labelled = TableauBuilder::build_labelled(&rebuilt)?;
    if labelled.tableau != tableau.schutzenberger() {
        warn!(
            rebuilt = %labelled.tableau,
            expected = %tableau.schutzenberger(),
            "rebuilt tableau is not the evacuation"
        );
        return Err(ConsistencyError::Involution("tableaux"));
    }
    debug!(size = tableau.size(), "applied involution");
    Ok(Involution {
        triangulation: reversed,
        prograph: rebuilt,
        tableau: labelled,
    })
}

/// How a tableau compares with its image under the involution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Strictly larger than its image: the representative of its orbit.
    Canonical,
    /// A fixed point of the involution.
    Equivocal,
    /// Strictly smaller than its image.
    NonCanonical,
}

pub fn check_symmetry(tableau: &Tableau) -> SymmetryType {
    let image = tableau.schutzenberger();
    match tableau.cmp(&image) {
        std::cmp::Ordering::Greater => SymmetryType::Canonical,
        std::cmp::Ordering::Equal => SymmetryType::Equivocal,
        std::cmp::Ordering::Less => SymmetryType::NonCanonical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::enumerate;

    fn state(t: &Triangulation) -> (PcProgram, Tableau) {
        let program = PcProgram::build(t).unwrap();
        let tableau = TableauBuilder::build(&program).unwrap();
        (program, tableau)
    }

    #[test]
    fn test_minimal_is_fixed() {
        let t = Triangulation::new();
        let (program, tableau) = state(&t);
        let image = apply(&t, &program, &tableau).unwrap();
        assert_eq!(image.tableau.tableau, tableau);
        assert!(image.triangulation.is_isomorphic(&t).unwrap());
    }

    #[test]
    fn test_twice_is_identity() {
        let mut t = Triangulation::new();
        let top = t.top_face().unwrap();
        let insertion = t.add_point(top).unwrap();
        t.add_point(insertion.faces[1]).unwrap();
        let (program, tableau) = state(&t);

        let once = apply(&t, &program, &tableau).unwrap();
        let twice = apply(
            &once.triangulation,
            &once.prograph,
            &once.tableau.tableau,
        )
        .unwrap();
        assert_eq!(twice.tableau.tableau, tableau);
        assert_eq!(twice.prograph, program);
        assert!(twice.triangulation.is_isomorphic(&t).unwrap());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let mut t = Triangulation::new();
        let top = t.top_face().unwrap();
        t.add_point(top).unwrap();
        let (program, _) = state(&t);
        let wrong = Tableau::min_element(2).unwrap();
        assert_eq!(
            apply(&t, &program, &wrong).unwrap_err(),
            ConsistencyError::Involution("tableaux")
        );
    }

    #[test]
    fn test_symmetry_types_of_size_two() {
        let all = enumerate(2);
        let count = |kind| all.iter().filter(|t| check_symmetry(t) == kind).count();
        assert_eq!(count(SymmetryType::Equivocal), 3);
        assert_eq!(count(SymmetryType::Canonical), 1);
        assert_eq!(count(SymmetryType::NonCanonical), 1);
    }
}
