/// P = 3: 1 x 10
pub const TRIANGLE_P3: &[f64] = &[
    0.5059637914843115, 0.5059637914843116, 0.5059637914843119, -0.8363152290754889,
    -0.8363152290754891, -0.8363152290754891, -0.8363152290754897, -0.8363152290754891,
    -0.8363152290754898, 4.5,
];

/// P = 4: 3 x 15
pub const TRIANGLE_P4: &[f64] = &[
    1.473866405971784, -0.4873245458152482, -0.4873245458152483, -2.157170326583087,
    -0.7895371825786641, 1.002268609355065, 0.4569922360188257, 0.4160673296503333,
    0.4569922360188257, 1.002268609355065, -0.7895371825786643, -2.157170326583087,
    7.066481928037422, -2.00343662222666, -2.00343662222666,

    -0.4873245458152483, 1.473866405971784, -0.4873245458152482, 1.002268609355065,
    -0.7895371825786646, -2.157170326583087, -2.157170326583087, -0.7895371825786643,
    1.002268609355065, 0.4569922360188255, 0.4160673296503333, 0.4569922360188255,
    -2.00343662222666, 7.066481928037421, -2.00343662222666,

    -0.4873245458152483, -0.4873245458152481, 1.473866405971784, 0.4569922360188258,
    0.4160673296503332, 0.4569922360188255, 1.002268609355065, -0.7895371825786646,
    -2.157170326583087, -2.157170326583088, -0.7895371825786643, 1.002268609355065,
    -2.00343662222666, -2.00343662222666, 7.066481928037422,
];

/// P = 5: 6 x 21
pub const TRIANGLE_P5: &[f64] = &[
    2.955509375394112, 0.4850633218816851, 0.4850633218816851, -4.015153971419451,
    -0.6339185304220427, 1.140973028173454, -1.041278651590119, -0.3192965376118003,
    -0.2178043751582093, -0.2178043751582093, -0.3192965376118008, -1.041278651590118,
    1.140973028173453, -0.633918530422042, -4.015153971419451, 10.16896081482358,
    -3.086925777444234, 1.177507607441262, 0.8971975820812148, 1.177507607441263,
    -3.086925777444236,

    -1.87982956469617, -1.879829564696171, 0.5695483481139566, 3.558924203285685,
    -2.437779912677446, -2.437779912677446, 3.558924203285686, 1.772590081128005,
    0.9751122788728792, 0.1149068856949735, -0.833741865064019, -0.8337418650640189,
    0.1149068856949739, 0.9751122788728801, 1.772590081128005, -6.137619043989807,
    12.47852594090006, -6.137619043989807, -2.280366067778754, 2.247531721435293,
    -2.280366067778758,

    0.4850633218816852, 2.955509375394111, 0.4850633218816852, -1.041278651590119,
    1.140973028173453, -0.6339185304220422, -4.01515397141945, -4.015153971419449,
    -0.6339185304220425, 1.140973028173453, -1.041278651590118, -0.3192965376118005,
    -0.2178043751582091, -0.2178043751582096, -0.3192965376118004, 1.177507607441262,
    -3.086925777444234, 10.16896081482358, -3.086925777444233, 1.177507607441262,
    0.8971975820812153,

    0.569548348113957, -1.87982956469617, -1.879829564696171, -0.8337418650640194,
    0.114906885694974, 0.97511227887288, 1.772590081128004, 3.558924203285685,
    -2.437779912677446, -2.437779912677443, 3.558924203285685, 1.772590081128006,
    0.9751122788728793, 0.1149068856949746, -0.8337418650640199, 2.247531721435295,
    -2.280366067778758, -6.137619043989805, 12.47852594090005, -6.137619043989806,
    -2.280366067778759,

    0.4850633218816858, 0.4850633218816853, 2.955509375394112, -0.3192965376118007,
    -0.2178043751582097, -0.2178043751582098, -0.3192965376118001, -1.041278651590119,
    1.140973028173454, -0.6339185304220429, -4.015153971419452, -4.01515397141945,
    -0.6339185304220436, 1.140973028173455, -1.04127865159012, 1.177507607441263,
    0.8971975820812174, 1.177507607441262, -3.086925777444234, 10.16896081482359,
    -3.086925777444237,

    -1.879829564696172, 0.5695483481139572, -1.879829564696172, 1.772590081128005,
    0.9751122788728803, 0.114906885694975, -0.8337418650640201, -0.8337418650640197,
    0.114906885694974, 0.9751122788728801, 1.772590081128007, 3.558924203285685,
    -2.437779912677443, -2.437779912677449, 3.558924203285688, -6.137619043989808,
    -2.280366067778761, 2.247531721435295, -2.280366067778758, -6.137619043989812,
    12.4785259409000,
];

/// P = 6: 10 x 28
pub const TRIANGLE_P6: &[f64] = &[
    4.990795106388393, -0.4798837984147291, -0.4798837984147287, -6.458245423578343,
    -0.3639631629214212, 1.22336563258444, -1.237281132017878, 1.048637951819922,
    0.2399023612066681, 0.1476405704559505, 0.09371675625975406, 0.1476405704559514,
    0.2399023612066667, 1.048637951819923, -1.23728113201788, 1.223365632584442,
    -0.3639631629214235, -6.458245423578343, 13.89283735202935, -4.276280903149708,
    1.808916611395355, -0.8152389231864423, -0.4900563063939803, -0.4900563063939829,
    -0.8152389231864404, 1.808916611395354, -4.276280903149705, 1.327623829722839,

    -4.689458981957318, 2.303409358216713, -0.6686820957216264, 8.401259643873185,
    -5.327640035897593, -2.380733253738293, 4.596086431435174, -4.67688716273589,
    -1.613859854887045, -0.8313011663168295, -0.3532695050699889, 0.01692167342423888,
    0.7838078136607817, 1.115432125134806, -0.6396258416621832, -0.4063403163660048,
    1.633507742829366, 4.420179509817743, -13.10100871536221, 20.06968509845678,
    -10.70127780752898, 5.23777942309397, 2.406990467529688, 0.7247013815918657,
    -2.116258714513936, 3.071067981878374, -2.093285349716039, -4.18119984946874,

    2.303409358216714, -4.689458981957322, -0.6686820957216258, -4.676887162735897,
    4.596086431435186, -2.380733253738301, -5.327640035897589, 8.401259643873187,
    4.420179509817745, 1.633507742829365, -0.4063403163660045, -0.6396258416621829,
    1.115432125134805, 0.7838078136607807, 0.01692167342423913, -0.353269505069989,
    -0.8313011663168312, -1.613859854887043, 5.23777942309397, -10.70127780752899,
    20.06968509845678, -13.10100871536222, -2.093285349716035, 3.071067981878372,
    -2.116258714513934, 0.7247013815918641, 2.406990467529694, -4.181199849468742,

    -0.4798837984147298, 4.990795106388394, -0.4798837984147283, 1.048637951819924,
    -1.237281132017881, 1.223365632584441, -0.3639631629214217, -6.458245423578346,
    -6.458245423578344, -0.3639631629214246, 1.223365632584442, -1.237281132017879,
    1.048637951819922, 0.2399023612066666, 0.1476405704559507, 0.09371675625975429,
    0.1476405704559513, 0.2399023612066678, -0.8152389231864428, 1.808916611395358,
    -4.27628090314971, 13.89283735202935, -4.276280903149705, 1.808916611395352,
    -0.8152389231864391, -0.4900563063939816, -0.490056306393983, 1.32762382972284,

    -0.6686820957216246, -4.689458981957318, 2.303409358216711, 1.115432125134803,
    -0.6396258416621817, -0.4063403163660055, 1.633507742829363, 4.420179509817745,
    8.40125964387318, -5.32764003589758, -2.3807332537383, 4.596086431435179,
    -4.676887162735889, -1.613859854887039, -0.8313011663168305, -0.3532695050699883,
    0.016921673424238, 0.78380781366078, -2.116258714513931, 3.071067981878368,
    -2.093285349716028, -13.10100871536221, 20.06968509845676, -10.70127780752896,
    5.23777942309396, 2.406990467529691, 0.724701381591865, -4.181199849468744,

    -0.6686820957216236, 2.30340935821671, -4.689458981957321, 0.7838078136607789,
    0.01692167342423904, -0.353269505069988, -0.8313011663168306, -1.61385985488704,
    -4.676887162735886, 4.596086431435173, -2.380733253738294, -5.327640035897591,
    8.401259643873187, 4.420179509817743, 1.633507742829364, -0.4063403163660066,
    -0.6396258416621801, 1.115432125134801, -2.116258714513929, 0.7247013815918617,
    2.406990467529691, 5.237779423093964, -10.70127780752897, 20.06968509845676,
    -13.10100871536221, -2.093285349716029, 3.071067981878367, -4.18119984946874,

    -0.4798837984147294, -0.4798837984147293, 4.990795106388396, 0.2399023612066681,
    0.1476405704559513, 0.09371675625975392, 0.147640570455951, 0.2399023612066676,
    1.048637951819923, -1.23728113201788, 1.223365632584443, -0.3639631629214256,
    -6.458245423578345, -6.458245423578348, -0.3639631629214194, 1.223365632584439,
    -1.237281132017879, 1.048637951819923, -0.8152389231864435, -0.4900563063939818,
    -0.4900563063939812, -0.8152389231864419, 1.808916611395355, -4.276280903149707,
    13.89283735202936, -4.27628090314971, 1.808916611395358, 1.327623829722839,

    2.303409358216711, -0.6686820957216234, -4.689458981957324, -1.613859854887043,
    -0.8313011663168315, -0.353269505069988, 0.01692167342423824, 0.7838078136607798,
    1.115432125134801, -0.639625841662179, -0.4063403163660082, 1.633507742829368,
    4.420179509817745, 8.401259643873196, -5.327640035897597, -2.380733253738291,
    4.596086431435175, -4.676887162735889, 5.23777942309397, 2.406990467529692,
    0.7247013815918628, -2.11625871451393, 3.071067981878368, -2.093285349716032,
    -13.10100871536222, 20.06968509845678, -10.70127780752898, -4.181199849468741,

    -4.689458981957318, -0.6686820957216246, 2.303409358216713, 4.420179509817742,
    1.633507742829366, -0.4063403163660054, -0.6396258416621825, 1.115432125134803,
    0.7838078136607793, 0.01692167342423931, -0.3532695050699873, -0.831301166316834,
    -1.61385985488704, -4.676887162735893, 4.596086431435182, -2.380733253738301,
    -5.327640035897584, 8.401259643873182, -13.10100871536221, -2.093285349716037,
    3.071067981878372, -2.11625871451393, 0.7247013815918595, 2.406990467529697,
    5.237779423093967, -10.70127780752898, 20.06968509845677, -4.181199849468742,

    2.740410900541109, 2.740410900541107, 2.740410900541116, -3.896719679725134,
    0.8525687056196629, 2.629196981978395, 0.8525687056196668, -3.896719679725134,
    -3.89671967972513, 0.8525687056196584, 2.6291969819784, 0.8525687056196664,
    -3.896719679725144, -3.896719679725143, 0.8525687056196644, 2.629196981978399,
    0.8525687056196618, -3.896719679725134, 9.218530840490745, -7.999447648758338,
    -7.999447648758347, 9.218530840490741, -7.99944764875833, -7.999447648758361,
    9.218530840490766, -7.999447648758353, -7.99944764875834, 23.49717556815212,
];
