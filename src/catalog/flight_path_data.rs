// Balloon position in metres, sampled once per simulation step.

/// Samples spent on the ground at the origin before launch.
pub(super) const GROUND_SAMPLES: usize = 150;

/// Flight after launch, as `[x, y, z]`.
pub(super) const FLIGHT_PATH: [[i32; 3]; 850] = [
    [0, -2, 0], [2, -85, 19], [6, -207, 100], [16, -332, 231], [35, -451, 387], [67, -543, 556],
    [116, -596, 734], [183, -612, 914], [271, -592, 1094], [383, -546, 1270], [510, -496, 1441], [645, -453, 1603],
    [781, -425, 1755], [914, -409, 1895], [1032, -402, 2021], [1131, -401, 2132], [1206, -404, 2225], [1260, -409, 2299],
    [1300, -414, 2352], [1331, -419, 2378], [1353, -422, 2371], [1371, -424, 2328], [1385, -423, 2263], [1397, -421, 2190],
    [1409, -415, 2118], [1421, -405, 2050], [1435, -388, 1987], [1452, -364, 1931], [1473, -335, 1883], [1498, -300, 1844],
    [1526, -261, 1816], [1555, -218, 1801], [1584, -174, 1800], [1614, -129, 1816], [1641, -84, 1845], [1663, -40, 1880],
    [1677, 2, 1915], [1682, 39, 1947], [1676, 69, 1972], [1662, 91, 1989], [1640, 106, 1995], [1613, 113, 1990],
    [1583, 116, 1972], [1551, 115, 1947], [1518, 111, 1920], [1484, 106, 1894], [1452, 100, 1872], [1419, 94, 1858],
    [1388, 87, 1852], [1358, 80, 1857], [1330, 72, 1871], [1304, 64, 1893], [1278, 54, 1918], [1253, 42, 1941],
    [1229, 27, 1961], [1205, 10, 1973], [1182, -10, 1978], [1160, -31, 1973], [1141, -54, 1958], [1125, -78, 1937],
    [1114, -102, 1914], [1109, -126, 1892], [1110, -150, 1875], [1119, -172, 1864], [1134, -193, 1861], [1154, -212, 1867],
    [1178, -228, 1882], [1204, -242, 1902], [1232, -253, 1925], [1260, -262, 1945], [1289, -269, 1962], [1318, -273, 1971],
    [1347, -275, 1973], [1375, -273, 1965], [1404, -268, 1950], [1432, -259, 1929], [1461, -246, 1907], [1489, -228, 1887],
    [1517, -206, 1873], [1545, -181, 1864], [1572, -154, 1864], [1598, -125, 1873], [1620, -95, 1890], [1638, -66, 1911],
    [1649, -36, 1932], [1654, -7, 1951], [1652, 19, 1965], [1643, 42, 1971], [1628, 61, 1970], [1609, 76, 1959],
    [1587, 86, 1942], [1563, 94, 1921], [1539, 99, 1900], [1513, 102, 1882], [1488, 103, 1869], [1463, 103, 1864],
    [1437, 102, 1867], [1412, 100, 1879], [1387, 96, 1898], [1361, 90, 1919], [1336, 81, 1939], [1311, 69, 1973],
    [1285, 53, 2047], [1259, 32, 2152], [1229, 1, 2273], [1196, -38, 2402], [1162, -78, 2532], [1128, -119, 2661],
    [1095, -160, 2786], [1065, -201, 2904], [1040, -240, 3015], [1020, -277, 3115], [1006, -312, 3204], [997, -343, 3280],
    [992, -370, 3342], [990, -393, 3389], [991, -412, 3420], [994, -429, 3432], [998, -443, 3424], [1005, -455, 3399],
    [1011, -466, 3365], [1018, -474, 3330], [1025, -481, 3301], [1033, -486, 3281], [1040, -491, 3271], [1047, -495, 3274],
    [1054, -498, 3287], [1061, -501, 3307], [1068, -503, 3327], [1074, -503, 3344], [1081, -503, 3354], [1086, -502, 3355],
    [1092, -500, 3346], [1096, -498, 3330], [1101, -495, 3312], [1104, -492, 3296], [1107, -489, 3284], [1109, -485, 3280],
    [1111, -481, 3283], [1113, -477, 3294], [1114, -473, 3309], [1114, -469, 3325], [1114, -464, 3337], [1113, -459, 3343],
    [1112, -454, 3342], [1111, -449, 3334], [1109, -443, 3322], [1107, -438, 3307], [1105, -432, 3295], [1103, -427, 3287],
    [1100, -421, 3285], [1098, -416, 3290], [1096, -410, 3300], [1093, -405, 3314], [1091, -399, 3326], [1088, -393, 3336],
    [1086, -388, 3340], [1083, -382, 3337], [1081, -377, 3329], [1078, -371, 3316], [1076, -366, 3304], [1073, -360, 3293],
    [1071, -355, 3288], [1068, -350, 3288], [1066, -345, 3294], [1064, -340, 3305], [1061, -335, 3318], [1059, -331, 3329],
    [1057, -326, 3336], [1055, -322, 3338], [1054, -318, 3333], [1052, -314, 3324], [1051, -310, 3312], [1050, -307, 3301],
    [1049, -303, 3292], [1048, -301, 3289], [1047, -298, 3291], [1047, -296, 3298], [1047, -294, 3310], [1047, -293, 3321],
    [1047, -291, 3331], [1047, -290, 3336], [1047, -289, 3336], [1048, -288, 3330], [1048, -287, 3320], [1049, -286, 3308],
    [1049, -285, 3298], [1050, -284, 3291], [1051, -284, 3289], [1052, -284, 3293], [1053, -284, 3302], [1054, -284, 3314],
    [1055, -284, 3325], [1056, -285, 3333], [1057, -285, 3336], [1058, -285, 3334], [1059, -285, 3326], [1060, -286, 3316],
    [1061, -286, 3304], [1062, -286, 3295], [1063, -287, 3290], [1064, -287, 3269], [1065, -288, 3203], [1066, -289, 3103],
    [1067, -291, 2987], [1068, -295, 2863], [1069, -302, 2735], [1070, -313, 2607], [1071, -329, 2481], [1073, -349, 2357],
    [1076, -373, 2239], [1082, -401, 2127], [1095, -429, 2023], [1122, -454, 1928], [1164, -470, 1843], [1221, -471, 1772],
    [1290, -455, 1715], [1367, -423, 1674], [1450, -377, 1654], [1533, -320, 1659], [1616, -257, 1692], [1695, -190, 1745],
    [1760, -123, 1804], [1807, -59, 1863], [1835, -1, 1917], [1847, 46, 1962], [1845, 81, 1998], [1832, 104, 2023],
    [1809, 117, 2033], [1780, 123, 2026], [1747, 124, 2004], [1711, 123, 1970], [1673, 120, 1933], [1635, 116, 1898],
    [1597, 112, 1868], [1560, 109, 1847], [1523, 105, 1836], [1487, 102, 1837], [1453, 98, 1852], [1420, 94, 1877],
    [1388, 88, 1907], [1356, 81, 1937], [1325, 71, 1962], [1294, 58, 1980], [1262, 41, 1988], [1232, 22, 1986],
    [1202, 0, 1971], [1175, -23, 1948], [1152, -46, 1921], [1135, -70, 1894], [1125, -93, 1872], [1122, -116, 1857],
    [1127, -138, 1851], [1137, -159, 1856], [1153, -178, 1871], [1171, -196, 1894], [1192, -212, 1920], [1214, -226, 1945],
    [1236, -240, 1965], [1259, -252, 1977], [1281, -263, 1981], [1304, -271, 1974], [1327, -276, 1956], [1351, -277, 1933],
    [1375, -274, 1907], [1400, -265, 1884], [1426, -251, 1867], [1453, -232, 1857], [1480, -210, 1856], [1507, -185, 1866],
    [1534, -159, 1885], [1559, -132, 1909], [1580, -105, 1934], [1596, -78, 1955], [1605, -51, 1971], [1607, -26, 1978],
    [1604, -3, 1976], [1596, 17, 1963], [1584, 34, 1942], [1570, 49, 1918], [1554, 62, 1894], [1537, 73, 1874],
    [1520, 82, 1861], [1503, 90, 1856], [1486, 97, 1862], [1468, 101, 1877], [1449, 103, 1899], [1430, 102, 1924],
    [1409, 98, 1947], [1388, 90, 1965], [1365, 79, 1976], [1341, 65, 1978], [1318, 48, 1969], [1294, 30, 1951],
    [1270, 12, 1928], [1248, -7, 1904], [1229, -25, 1882], [1214, -44, 1866], [1204, -62, 1858], [1199, -80, 1859],
    [1198, -97, 1871], [1201, -113, 1915], [1204, -130, 2005], [1208, -147, 2123], [1210, -168, 2253], [1207, -193, 2389],
    [1201, -219, 2526], [1194, -246, 2660], [1186, -272, 2789], [1177, -297, 2911], [1168, -320, 3024], [1159, -340, 3127],
    [1150, -356, 3217], [1140, -369, 3295], [1131, -379, 3357], [1121, -386, 3405], [1112, -392, 3434], [1102, -396, 3445],
    [1094, -399, 3435], [1086, -401, 3407], [1079, -402, 3370], [1072, -403, 3334], [1065, -404, 3304], [1059, -405, 3283],
    [1053, -405, 3273], [1049, -406, 3275], [1045, -406, 3288], [1041, -407, 3308], [1039, -407, 3328], [1037, -407, 3345],
    [1035, -407, 3355], [1034, -408, 3355], [1034, -408, 3347], [1034, -408, 3331], [1034, -407, 3313], [1035, -407, 3296],
    [1036, -407, 3285], [1038, -407, 3280], [1039, -407, 3283], [1041, -407, 3294], [1043, -406, 3309], [1045, -406, 3325],
    [1047, -406, 3337], [1050, -406, 3343], [1052, -405, 3343], [1054, -404, 3335], [1056, -404, 3322], [1058, -403, 3307],
    [1061, -402, 3295], [1063, -401, 3287], [1065, -400, 3285], [1067, -399, 3290], [1069, -398, 3300], [1072, -397, 3314],
    [1074, -396, 3326], [1076, -395, 3336], [1078, -394, 3340], [1079, -392, 3337], [1081, -391, 3329], [1083, -389, 3317],
    [1084, -387, 3304], [1085, -385, 3294], [1087, -384, 3288], [1088, -382, 3288], [1088, -380, 3294], [1089, -378, 3305],
    [1090, -376, 3318], [1090, -374, 3329], [1090, -372, 3336], [1090, -369, 3338], [1090, -367, 3333], [1090, -365, 3324],
    [1090, -362, 3312], [1089, -360, 3301], [1088, -357, 3292], [1088, -355, 3289], [1087, -352, 3291], [1086, -350, 3298],
    [1085, -347, 3309], [1085, -345, 3321], [1084, -342, 3331], [1083, -340, 3336], [1082, -337, 3336], [1080, -335, 3330],
    [1079, -332, 3320], [1078, -330, 3308], [1077, -327, 3298], [1076, -325, 3291], [1075, -322, 3289], [1074, -320, 3293],
    [1073, -318, 3302], [1072, -315, 3314], [1071, -313, 3324], [1069, -311, 3333], [1068, -309, 3336], [1067, -306, 3334],
    [1066, -304, 3327], [1065, -302, 3316], [1064, -300, 3305], [1063, -298, 3295], [1062, -296, 3288], [1061, -294, 3249],
    [1060, -293, 3154], [1059, -293, 3025], [1058, -295, 2879], [1058, -301, 2722], [1058, -312, 2558], [1058, -329, 2388],
    [1059, -353, 2215], [1064, -381, 2041], [1083, -408, 1866], [1125, -424, 1692], [1192, -419, 1521], [1286, -386, 1353],
    [1402, -324, 1189], [1535, -237, 1031], [1675, -141, 881], [1815, -49, 738], [1952, 27, 605], [2083, 81, 484],
    [2211, 110, 375], [2337, 119, 281], [2460, 110, 204], [2579, 89, 150], [2693, 60, 122], [2798, 28, 135],
    [2892, -5, 194], [2972, -39, 282], [3033, -73, 383], [3074, -107, 489], [3092, -138, 596], [3090, -165, 701],
    [3068, -184, 801], [3031, -191, 895], [2982, -181, 980], [2924, -153, 1055], [2863, -106, 1118], [2803, -43, 1166],
    [2748, 28, 1196], [2710, 102, 1204], [2691, 175, 1184], [2694, 248, 1137], [2722, 318, 1074], [2776, 380, 1007],
    [2852, 427, 939], [2939, 452, 873], [3028, 455, 812], [3117, 439, 757], [3202, 406, 709], [3278, 360, 671],
    [3340, 303, 644], [3386, 238, 631], [3416, 168, 637], [3427, 94, 664], [3420, 19, 707], [3394, -57, 758],
    [3351, -131, 812], [3291, -199, 864], [3217, -254, 912], [3132, -288, 953], [3037, -294, 986], [2938, -272, 1008],
    [2838, -221, 1016], [2740, -148, 1009], [2659, -63, 983], [2606, 23, 945], [2582, 108, 901], [2584, 186, 855],
    [2608, 250, 812], [2650, 299, 773], [2706, 333, 740], [2775, 353, 716], [2852, 362, 702], [2933, 359, 702],
    [3013, 345, 718], [3091, 324, 748], [3162, 296, 787], [3220, 263, 830], [3259, 227, 872], [3281, 189, 911],
    [3286, 149, 943], [3276, 110, 968], [3254, 70, 983], [3223, 32, 985], [3185, -3, 971], [3143, -33, 944],
    [3097, -56, 907], [3051, -70, 867], [3004, -77, 827], [2958, -76, 790], [2913, -68, 758], [2872, -54, 733],
    [2838, -35, 718], [2812, -13, 715], [2794, 13, 726], [2784, 41, 751], [2782, 70, 787], [2787, 101, 827],
    [2799, 132, 867], [2816, 164, 904], [2840, 196, 935], [2868, 228, 951], [2900, 259, 940], [2937, 285, 895],
    [2977, 304, 827], [3020, 310, 749], [3063, 303, 666], [3107, 281, 583], [3152, 247, 501], [3195, 201, 422],
    [3238, 146, 348], [3278, 83, 280], [3314, 13, 221], [3342, -61, 171], [3361, -138, 133], [3368, -217, 111],
    [3361, -297, 110], [3340, -376, 136], [3303, -453, 186], [3250, -523, 249], [3185, -578, 319], [3112, -615, 390],
    [3036, -631, 458], [2957, -625, 522], [2876, -594, 580], [2793, -533, 629], [2707, -446, 667], [2625, -350, 692],
    [2558, -254, 701], [2515, -158, 687], [2495, -70, 651], [2496, 6, 600], [2515, 66, 542], [2547, 108, 482],
    [2591, 134, 423], [2642, 146, 368], [2699, 146, 317], [2758, 136, 274], [2819, 119, 240], [2880, 96, 217],
    [2941, 66, 209], [3001, 31, 220], [3057, -8, 252], [3106, -48, 300], [3143, -90, 355], [3165, -132, 413],
    [3171, -173, 469], [3162, -214, 521], [3139, -251, 568], [3103, -281, 606], [3058, -300, 634], [3006, -307, 650],
    [2950, -299, 648], [2893, -278, 627], [2837, -247, 588], [2785, -209, 539], [2743, -167, 486], [2717, -125, 432],
    [2706, -85, 381], [2710, -50, 335], [2726, -23, 295], [2751, -5, 263], [2782, 5, 242], [2817, 8, 234],
    [2855, 5, 244], [2893, -3, 273], [2931, -16, 317], [2969, -30, 369], [3003, -45, 423], [3032, -61, 476],
    [3053, -77, 525], [3065, -92, 567], [3067, -108, 602], [3061, -123, 627], [3048, -136, 638], [3030, -146, 633],
    [3009, -154, 608], [2985, -158, 568], [2961, -160, 519], [2938, -160, 467], [2915, -158, 416], [2895, -156, 368],
    [2880, -154, 324], [2870, -152, 288], [2866, -150, 260], [2866, -148, 244], [2871, -146, 242], [2879, -145, 259],
    [2888, -144, 293], [2898, -143, 340], [2908, -142, 392], [2917, -141, 445], [2925, -140, 495], [2930, -137, 541],
    [2933, -132, 580], [2931, -124, 611], [2927, -115, 630], [2921, -103, 635], [2914, -90, 621], [2907, -76, 590],
    [2899, -61, 545], [2893, -47, 486], [2890, -34, 415], [2891, -23, 336], [2898, -19, 252], [2912, -24, 166],
    [2932, -38, 79], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
    [2956, -60, 0], [2956, -60, 0], [2956, -60, 0], [2956, -60, 0],
];
