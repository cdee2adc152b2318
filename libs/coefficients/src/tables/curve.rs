// curve interpolation points -> blended Bezier control points

/// P = 2: 1 x 3
pub const CURVE_P2: &[f64] = &[
    -0.5, -0.5, 2.0,
];

/// P = 3: 2 x 4
pub const CURVE_P3: &[f64] = &[
    -0.970273514083553, 0.333333333333333, 2.71895067382449, -1.08201049307427,

    0.333333333333333, -0.970273514083553, -1.08201049307427, 2.71895067382449,
];

/// P = 4: 3 x 5
pub const CURVE_P4: &[f64] = &[
    -1.4304202857228, -0.25, 3.39545839723405, -1.46967987431139,
    0.754641762800137,

    0.953613523815196, 0.953613523815197, -2.76673344002279, 4.62623983241519,
    -2.76673344002279,

    -0.25, -1.4304202857228, 0.754641762800137, -1.46967987431139,
    3.39545839723405,
];

/// P = 5: 4 x 6
pub const CURVE_P5: &[f64] = &[
    -1.88592269024942, 0.2, 4.05614415979432, -1.81653638123435,
    1.0295423816296, -0.583227469940158,

    1.85476912333284, -0.942961345124708, -5.01939997635205, 6.96205913930752,
    -4.56234099538677, 2.70787405422317,

    -0.942961345124708, 1.85476912333285, 2.70787405422317, -4.56234099538677,
    6.96205913930752, -5.01939997635206,

    0.2, -1.88592269024942, -0.583227469940158, 1.0295423816296,
    -1.81653638123435, 4.05614415979432,
];

/// P = 6: 5 x 7
pub const CURVE_P6: &[f64] = &[
    -2.33890800235808, -0.166666666666667, 4.70907763497668, -2.14695478588352,
    1.2670886004356, -0.80040589915343, 0.476769118649422,

    3.03457283388393, 0.935563200943235, -7.82909978199834, 9.74813267975089,
    -6.60581336123903, 4.37362214799981, -2.65697771934049,

    -2.27592962541295, -2.27592962541295, 6.3088040999163, -9.70710791530195,
    12.3484668815972, -9.70710791530194, 6.3088040999163,

    0.935563200943235, 3.03457283388393, -2.65697771934049, 4.37362214799981,
    -6.60581336123903, 9.74813267975088, -7.82909978199834,

    -0.166666666666667, -2.33890800235809, 0.476769118649422, -0.80040589915343,
    1.2670886004356, -2.14695478588352, 4.70907763497668,
];
