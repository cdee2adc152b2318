/// P = 4: 1 x 35
pub const TET_P4: &[f64] = &[
    -0.665492638178598, -0.665492638178598, -0.665492638178598, -0.665492638178598,
    0.697909481209196, 0.496340368840329, 0.697909481209197, 0.697909481209196,
    0.496340368840329, 0.697909481209196, 0.697909481209196, 0.49634036884033,
    0.697909481209196, 0.697909481209196, 0.496340368840329, 0.697909481209196,
    0.697909481209196, 0.496340368840329, 0.697909481209196, 0.697909481209196,
    0.496340368840329, 0.697909481209196, -1.52980434179205, -1.52980434179205,
    -1.52980434179205, -1.52980434179205, -1.52980434179205, -1.52980434179205,
    -1.52980434179205, -1.52980434179205, -1.52980434179205, -1.52980434179205,
    -1.52980434179205, -1.52980434179205, 10.6666666666667,
];

/// P = 4: 1 x 47
///
/// Face blocks are three Bezier face nodes followed by three Gregory face nodes, which
/// receive no contribution.
pub const GREGORY_TET_P4: &[f64] = &[
    -0.665492638178598, -0.665492638178598, -0.665492638178598, -0.665492638178598,
    0.697909481209196, 0.496340368840329, 0.697909481209197, 0.697909481209196,
    0.496340368840329, 0.697909481209196, 0.697909481209196, 0.49634036884033,
    0.697909481209196, 0.697909481209196, 0.496340368840329, 0.697909481209196,
    0.697909481209196, 0.496340368840329, 0.697909481209196, 0.697909481209196,
    0.496340368840329, 0.697909481209196, -1.52980434179205, -1.52980434179205,
    -1.52980434179205, 0.0, 0.0, 0.0,
    -1.52980434179205, -1.52980434179205, -1.52980434179205, 0.0,
    0.0, 0.0, -1.52980434179205, -1.52980434179205,
    -1.52980434179205, 0.0, 0.0, 0.0,
    -1.52980434179205, -1.52980434179205, -1.52980434179205, 0.0,
    0.0, 0.0, 10.6666666666667,
];
