// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pc_prograph::geometry::FaceId;
use pc_prograph::{Editor, EditorConfig, PcProgram, Tableau, TableauBuilder, Triangulation};

pub fn editor() -> Editor {
    Editor::new(EditorConfig::default()).expect("minimal triangulation")
}

/// Insert one point per pick, into the face at that index (modulo the face
/// count) of the current face list.
pub fn grow(editor: &mut Editor, picks: &[usize]) {
    for &pick in picks {
        let faces: Vec<FaceId> = editor.triangulation().faces().map(|(id, _)| id).collect();
        let face = faces[pick % faces.len()];
        editor.add_point(face).expect("insertion into a live face");
    }
}

/// Check that all three representations held by the editor agree.
pub fn assert_consistent(editor: &Editor) {
    let triangulation = editor.triangulation();
    triangulation.validate().expect("valid triangulation");

    let k = triangulation.size();
    assert_eq!(triangulation.face_count(), 2 * k);
    assert_eq!(triangulation.edge_count(), 3 * k);
    assert_eq!(triangulation.vertex_count(), k + 2);

    let prograph = editor.prograph();
    prograph.validate().expect("valid prograph");
    assert_eq!(prograph, &PcProgram::build(triangulation).unwrap());

    let tableau = editor.tableau();
    assert_eq!(tableau.size(), k);
    assert_eq!(Tableau::new(tableau.rows().clone()).as_ref(), Ok(tableau));
    assert_eq!(&TableauBuilder::build(prograph).unwrap(), tableau);

    let rebuilt = Triangulation::from_tableau(tableau).unwrap();
    assert!(rebuilt.is_isomorphic(triangulation).unwrap());
}
