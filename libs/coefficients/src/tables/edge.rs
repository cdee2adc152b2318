// interpolation points -> Bezier control points, one row per interior control point

/// P = 2: 1 x 3
pub const EDGE_P2: &[f64] = &[
    -0.5, -0.5, 2.0,
];

/// P = 3: 2 x 4
pub const EDGE_P3: &[f64] = &[
    -1.00596379148431, 0.333333333333333, 2.69317845753742, -1.02054799938644,

    0.333333333333333, -1.00596379148431, -1.02054799938644, 2.69317845753742,
];

/// P = 4: 3 x 5
pub const EDGE_P4: &[f64] = &[
    -1.52680420766155, -0.25, 3.37567603341243, -1.28732567375034,
    0.688453847999458,

    1.01786947177436, 1.01786947177436, -2.70941992094126, 4.38310089833379,
    -2.70941992094126,

    -0.25, -1.52680420766155, 0.688453847999459, -1.28732567375034,
    3.37567603341243,
];

/// P = 5: 4 x 6
pub const EDGE_P5: &[f64] = &[
    -2.06136018481524, 0.2, 4.05936188849008, -1.52513018373641,
    0.846118038541145, -0.518989558479574,

    2.07392858296555, -1.03068009240762, -5.04403528329688, 6.4850808350761,
    -4.1256786562572, 2.64138461392004,

    -1.03068009240762, 2.07392858296555, 2.64138461392004, -4.1256786562572,
    6.48508083507611, -5.04403528329688,

    0.2, -2.06136018481524, -0.518989558479574, 0.846118038541145,
    -1.52513018373641, 4.05936188849008,
];

/// P = 6: 5 x 7
pub const EDGE_P6: &[f64] = &[
    -2.60465921875445, -0.166666666666667, 4.74317259573776, -1.74847211573074,
    0.99151406014263, -0.630691218757935, 0.415802564029398,

    3.50945493261743, 1.04186368750178, -8.00777336834505, 8.99109434126308,
    -5.80152934540333, 3.85156704410589, -2.5846772917398,

    -2.63209119946307, -2.63209119946307, 6.39664544713349, -8.91824703868012,
    11.3073855820194, -8.91824703868012, 6.39664544713349,

    1.04186368750178, 3.50945493261743, -2.5846772917398, 3.85156704410589,
    -5.80152934540333, 8.99109434126308, -8.00777336834505,

    -0.166666666666667, -2.60465921875445, 0.415802564029398, -0.630691218757935,
    0.991514060142631, -1.74847211573074, 4.74317259573777,
];
