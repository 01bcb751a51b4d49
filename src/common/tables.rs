//! Reference data for QR Code symbols, versions 1 through 40.
//!
//! Every table is indexed with zero based positions: `Version::index()`,
//! `ECLevel::index()` and `Mode::index()`.

pub const VERSION_COUNT: usize = 40;

pub const EC_LEVEL_COUNT: usize = 4;

pub const MODE_COUNT: usize = 3;

pub const MASK_COUNT: usize = 8;

// Highest degree of any generator polynomial, i.e. most ecc codewords in a block
pub const MAX_EC_SIZE: usize = 30;

// Total codewords of a version 40 symbol
pub const MAX_PAYLOAD_SIZE: usize = 3706;

// Longest block, data and ecc codewords combined
pub const MAX_BLOCK_SIZE: usize = 153;

/// Maximum character count per mode, error correction level and version.
#[rustfmt::skip]
pub static MAX_CHAR_COUNT: [[[usize; VERSION_COUNT]; EC_LEVEL_COUNT]; MODE_COUNT] = [
    // Numeric
    [
        // L
        [
              41,   77,  127,  187,  255,  322,  370,  461,  552,  652,
             772,  883, 1022, 1101, 1250, 1408, 1548, 1725, 1903, 2061,
            2232, 2409, 2620, 2812, 3057, 3283, 3517, 3669, 3909, 4158,
            4417, 4686, 4965, 5253, 5529, 5836, 6153, 6479, 6743, 7089,
        ],
        // M
        [
              34,   63,  101,  149,  202,  255,  293,  365,  432,  513,
             604,  691,  796,  871,  991, 1082, 1212, 1346, 1500, 1600,
            1708, 1872, 2059, 2188, 2395, 2544, 2701, 2857, 3035, 3289,
            3486, 3693, 3909, 4134, 4343, 4588, 4775, 5039, 5313, 5596,
        ],
        // Q
        [
              27,   48,   77,  111,  144,  178,  207,  259,  312,  364,
             427,  489,  580,  621,  703,  775,  876,  948, 1063, 1159,
            1224, 1358, 1468, 1588, 1718, 1804, 1933, 2085, 2181, 2358,
            2473, 2670, 2805, 2949, 3081, 3244, 3417, 3599, 3791, 3993,
        ],
        // H
        [
              17,   34,   58,   82,  106,  139,  154,  202,  235,  288,
             331,  374,  427,  468,  530,  602,  674,  746,  813,  919,
             969, 1056, 1108, 1228, 1286, 1425, 1501, 1581, 1677, 1782,
            1897, 2022, 2157, 2301, 2361, 2524, 2625, 2735, 2927, 3057,
        ],
    ],
    // Alphanumeric
    [
        // L
        [
              25,   47,   77,  114,  154,  195,  224,  279,  335,  395,
             468,  535,  619,  667,  758,  854,  938, 1046, 1153, 1249,
            1352, 1460, 1588, 1704, 1853, 1990, 2132, 2223, 2369, 2520,
            2677, 2840, 3009, 3183, 3351, 3537, 3729, 3927, 4087, 4296,
        ],
        // M
        [
              20,   38,   61,   90,  122,  154,  178,  221,  262,  311,
             366,  419,  483,  528,  600,  656,  734,  816,  909,  970,
            1035, 1134, 1248, 1326, 1451, 1542, 1637, 1732, 1839, 1994,
            2113, 2238, 2369, 2506, 2632, 2780, 2894, 3054, 3220, 3391,
        ],
        // Q
        [
              16,   29,   47,   67,   87,  108,  125,  157,  189,  221,
             259,  296,  352,  376,  426,  470,  531,  574,  644,  702,
             742,  823,  890,  963, 1041, 1094, 1172, 1263, 1322, 1429,
            1499, 1618, 1700, 1787, 1867, 1966, 2071, 2181, 2298, 2420,
        ],
        // H
        [
              10,   20,   35,   50,   64,   84,   93,  122,  143,  174,
             200,  227,  259,  283,  321,  365,  408,  452,  493,  557,
             587,  640,  672,  744,  779,  864,  910,  958, 1016, 1080,
            1150, 1226, 1307, 1394, 1431, 1530, 1591, 1658, 1774, 1852,
        ],
    ],
    // Byte
    [
        // L
        [
              17,   32,   53,   78,  106,  134,  154,  192,  230,  271,
             321,  367,  425,  458,  520,  586,  644,  718,  792,  858,
             929, 1003, 1091, 1171, 1273, 1367, 1465, 1528, 1628, 1732,
            1840, 1952, 2068, 2188, 2303, 2431, 2563, 2699, 2809, 2953,
        ],
        // M
        [
              14,   26,   42,   62,   84,  106,  122,  152,  180,  213,
             251,  287,  331,  362,  412,  450,  504,  560,  624,  666,
             711,  779,  857,  911,  997, 1059, 1125, 1190, 1264, 1370,
            1452, 1538, 1628, 1722, 1809, 1911, 1989, 2099, 2213, 2331,
        ],
        // Q
        [
              11,   20,   32,   46,   60,   74,   86,  108,  130,  151,
             177,  203,  241,  258,  292,  322,  364,  394,  442,  482,
             509,  565,  611,  661,  715,  751,  805,  868,  908,  982,
            1030, 1112, 1168, 1228, 1283, 1351, 1423, 1499, 1579, 1663,
        ],
        // H
        [
               7,   14,   24,   34,   44,   58,   64,   84,   98,  119,
             137,  155,  177,  194,  220,  250,  280,  310,  338,  382,
             403,  439,  461,  511,  535,  593,  625,  658,  698,  742,
             790,  842,  898,  958,  983, 1051, 1093, 1139, 1219, 1273,
        ],
    ],
];

/// Bit width of the character count field per mode and version.
#[rustfmt::skip]
pub static CHAR_COUNT_BITS: [[usize; VERSION_COUNT]; MODE_COUNT] = [
    // Numeric
    [
        10, 10, 10, 10, 10, 10, 10, 10, 10, 12,
        12, 12, 12, 12, 12, 12, 12, 12, 12, 12,
        12, 12, 12, 12, 12, 12, 14, 14, 14, 14,
        14, 14, 14, 14, 14, 14, 14, 14, 14, 14,
    ],
    // Alphanumeric
    [
         9,  9,  9,  9,  9,  9,  9,  9,  9, 11,
        11, 11, 11, 11, 11, 11, 11, 11, 11, 11,
        11, 11, 11, 11, 11, 11, 13, 13, 13, 13,
        13, 13, 13, 13, 13, 13, 13, 13, 13, 13,
    ],
    // Byte
    [
         8,  8,  8,  8,  8,  8,  8,  8,  8, 16,
        16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
        16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
        16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    ],
];

/// Number of modules available for data and error correction codewords per version,
/// remainder bits included.
#[rustfmt::skip]
pub static CONTENT_MODULES: [usize; VERSION_COUNT] = [
      208,   359,   567,   807,  1079,  1383,  1568,  1936,  2336,  2768,
     3232,  3728,  4256,  4651,  5243,  5867,  6523,  7211,  7931,  8683,
     9252, 10068, 10916, 11796, 12708, 13652, 14628, 15371, 16411, 17483,
    18587, 19723, 20891, 22091, 23008, 24272, 25568, 26896, 28256, 29648,
];

/// Number of error correction blocks per level and version.
#[rustfmt::skip]
pub static EC_BLOCK_COUNT: [[usize; VERSION_COUNT]; EC_LEVEL_COUNT] = [
    // L
    [
         1,  1,  1,  1,  1,  2,  2,  2,  2,  4,
         4,  4,  4,  4,  6,  6,  6,  6,  7,  8,
         8,  9,  9, 10, 12, 12, 12, 13, 14, 15,
        16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    // M
    [
         1,  1,  1,  2,  2,  4,  4,  4,  5,  5,
         5,  8,  9,  9, 10, 10, 11, 13, 14, 16,
        17, 17, 18, 20, 21, 23, 25, 26, 28, 29,
        31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    // Q
    [
         1,  1,  2,  2,  4,  4,  6,  6,  8,  8,
         8, 10, 12, 16, 12, 17, 16, 18, 21, 20,
        23, 23, 25, 27, 29, 34, 34, 35, 38, 40,
        43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    // H
    [
         1,  1,  2,  4,  4,  4,  5,  6,  8,  8,
        11, 11, 16, 16, 18, 16, 19, 21, 25, 25,
        25, 34, 30, 32, 35, 37, 40, 42, 45, 48,
        51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Number of error correction codewords in each block per level and version.
#[rustfmt::skip]
pub static ECC_PER_BLOCK: [[usize; VERSION_COUNT]; EC_LEVEL_COUNT] = [
    // L
    [
         7, 10, 15, 20, 26, 18, 20, 24, 30, 18,
        20, 24, 26, 30, 22, 24, 28, 30, 28, 28,
        28, 28, 30, 30, 26, 28, 30, 30, 30, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // M
    [
        10, 16, 26, 18, 24, 16, 18, 22, 22, 26,
        30, 22, 22, 24, 24, 28, 28, 26, 26, 26,
        26, 28, 28, 28, 28, 28, 28, 28, 28, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    // Q
    [
        13, 22, 18, 26, 18, 24, 18, 22, 20, 24,
        28, 26, 24, 20, 30, 24, 28, 28, 26, 30,
        28, 30, 30, 30, 30, 28, 30, 30, 30, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    // H
    [
        17, 28, 22, 16, 22, 28, 26, 26, 24, 28,
        24, 28, 22, 24, 24, 30, 28, 28, 26, 28,
        30, 24, 30, 30, 30, 30, 30, 30, 30, 30,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

/// Alignment pattern center coordinates per version. Every pair drawn from a row is a
/// candidate center.
#[rustfmt::skip]
pub static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; VERSION_COUNT] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// BCH(15, 5) protected format information per level and mask, XOR masked with
/// `0b101010000010010`.
#[rustfmt::skip]
pub static FORMAT_INFOS: [[u32; MASK_COUNT]; EC_LEVEL_COUNT] = [
    // L
    [
        0b111011111000100, 0b111001011110011, 0b111110110101010, 0b111100010011101,
        0b110011000101111, 0b110001100011000, 0b110110001000001, 0b110100101110110,
    ],
    // M
    [
        0b101010000010010, 0b101000100100101, 0b101111001111100, 0b101101101001011,
        0b100010111111001, 0b100000011001110, 0b100111110010111, 0b100101010100000,
    ],
    // Q
    [
        0b011010101011111, 0b011000001101000, 0b011111100110001, 0b011101000000110,
        0b010010010110100, 0b010000110000011, 0b010111011011010, 0b010101111101101,
    ],
    // H
    [
        0b001011010001001, 0b001001110111110, 0b001110011100111, 0b001100111010000,
        0b000011101100010, 0b000001001010101, 0b000110100001100, 0b000100000111011,
    ],
];

/// Golay(18, 6) protected version information, present from version 7 onwards.
#[rustfmt::skip]
pub static VERSION_INFOS: [u32; VERSION_COUNT] = [
    0,
    0,
    0,
    0,
    0,
    0,
    0b000111110010010100,
    0b001000010110111100,
    0b001001101010011001,
    0b001010010011010011,
    0b001011101111110110,
    0b001100011101100010,
    0b001101100001000111,
    0b001110011000001101,
    0b001111100100101000,
    0b010000101101111000,
    0b010001010001011101,
    0b010010101000010111,
    0b010011010100110010,
    0b010100100110100110,
    0b010101011010000011,
    0b010110100011001001,
    0b010111011111101100,
    0b011000111011000100,
    0b011001000111100001,
    0b011010111110101011,
    0b011011000010001110,
    0b011100110000011010,
    0b011101001100111111,
    0b011110110101110101,
    0b011111001001010000,
    0b100000100111010101,
    0b100001011011110000,
    0b100010100010111010,
    0b100011011110011111,
    0b100100101100001011,
    0b100101010000101110,
    0b100110101001100100,
    0b100111010101000001,
    0b101000110001101001,
];

/// Powers of the primitive element 2 in GF(256) under the polynomial `0x11d`.
#[rustfmt::skip]
pub static EXP_TABLE: [u8; 256] = [
      1,   2,   4,   8,  16,  32,  64, 128,  29,  58, 116, 232, 205, 135,  19,  38,
     76, 152,  45,  90, 180, 117, 234, 201, 143,   3,   6,  12,  24,  48,  96, 192,
    157,  39,  78, 156,  37,  74, 148,  53, 106, 212, 181, 119, 238, 193, 159,  35,
     70, 140,   5,  10,  20,  40,  80, 160,  93, 186, 105, 210, 185, 111, 222, 161,
     95, 190,  97, 194, 153,  47,  94, 188, 101, 202, 137,  15,  30,  60, 120, 240,
    253, 231, 211, 187, 107, 214, 177, 127, 254, 225, 223, 163,  91, 182, 113, 226,
    217, 175,  67, 134,  17,  34,  68, 136,  13,  26,  52, 104, 208, 189, 103, 206,
    129,  31,  62, 124, 248, 237, 199, 147,  59, 118, 236, 197, 151,  51, 102, 204,
    133,  23,  46,  92, 184, 109, 218, 169,  79, 158,  33,  66, 132,  21,  42,  84,
    168,  77, 154,  41,  82, 164,  85, 170,  73, 146,  57, 114, 228, 213, 183, 115,
    230, 209, 191,  99, 198, 145,  63, 126, 252, 229, 215, 179, 123, 246, 241, 255,
    227, 219, 171,  75, 150,  49,  98, 196, 149,  55, 110, 220, 165,  87, 174,  65,
    130,  25,  50, 100, 200, 141,   7,  14,  28,  56, 112, 224, 221, 167,  83, 166,
     81, 162,  89, 178, 121, 242, 249, 239, 195, 155,  43,  86, 172,  69, 138,   9,
     18,  36,  72, 144,  61, 122, 244, 245, 247, 243, 251, 235, 203, 139,  11,  22,
     44,  88, 176, 125, 250, 233, 207, 131,  27,  54, 108, 216, 173,  71, 142,   1,
];

/// Discrete logarithms in GF(256). `LOG_TABLE[0]` is unused.
#[rustfmt::skip]
pub static LOG_TABLE: [u8; 256] = [
      0,   0,   1,  25,   2,  50,  26, 198,   3, 223,  51, 238,  27, 104, 199,  75,
      4, 100, 224,  14,  52, 141, 239, 129,  28, 193, 105, 248, 200,   8,  76, 113,
      5, 138, 101,  47, 225,  36,  15,  33,  53, 147, 142, 218, 240,  18, 130,  69,
     29, 181, 194, 125, 106,  39, 249, 185, 201, 154,   9, 120,  77, 228, 114, 166,
      6, 191, 139,  98, 102, 221,  48, 253, 226, 152,  37, 179,  16, 145,  34, 136,
     54, 208, 148, 206, 143, 150, 219, 189, 241, 210,  19,  92, 131,  56,  70,  64,
     30,  66, 182, 163, 195,  72, 126, 110, 107,  58,  40,  84, 250, 133, 186,  61,
    202,  94, 155, 159,  10,  21, 121,  43,  78, 212, 229, 172, 115, 243, 167,  87,
      7, 112, 192, 247, 140, 128,  99,  13, 103,  74, 222, 237,  49, 197, 254,  24,
    227, 165, 153, 119,  38, 184, 180, 124,  17,  68, 146, 217,  35,  32, 137,  46,
     55,  63, 209,  91, 149, 188, 207, 205, 144, 135, 151, 178, 220, 252, 190,  97,
    242,  86, 211, 171,  20,  42,  93, 158, 132,  60,  57,  83,  71, 109,  65, 162,
     31,  45,  67, 216, 183, 123, 164, 118, 196,  23,  73, 236, 127,  12, 111, 246,
    108, 161,  59,  82,  41, 157,  85, 170, 251,  96, 134, 177, 187, 204,  62,  90,
    203,  89,  95, 176, 156, 169, 160,  81,  11, 245,  22, 235, 122, 117,  44, 215,
     79, 174, 213, 233, 230, 231, 173, 232, 116, 214, 244, 234, 168,  80,  88, 175,
];

/// Reed-Solomon generator polynomials indexed by degree, highest order coefficient first.
/// Row `n` holds the `n + 1` coefficients of `(x - 2^0)(x - 2^1)...(x - 2^(n-1))`.
#[rustfmt::skip]
pub static GENERATOR_POLYNOMIALS: [[u8; MAX_EC_SIZE + 1]; MAX_EC_SIZE + 1] = [
    [
          1,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,   1,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,   3,   2,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,   7,  14,   8,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  15,  54, 120,  64,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  31, 198,  63, 147, 116,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  63,   1, 218,  32, 227,  38,   0,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 127, 122, 154, 164,  11,  68, 117,   0,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 255,  11,  81,  54, 239, 173, 200,  24,   0,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 226, 207, 158, 245, 235, 164, 232, 197,  37,   0,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 216, 194, 159, 111, 199,  94,  95, 113, 157, 193,   0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 172, 130, 163,  50, 123, 219, 162, 248, 144, 116, 160,   0,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  68, 119,  67, 118, 220,  31,   7,  84,  92, 127, 213,  97,   0,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 137,  73, 227,  17, 177,  17,  52,  13,  46,  43,  83, 132, 120,   0,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  14,  54, 114,  70, 174, 151,  43, 158, 195, 127, 166, 210, 234, 163,   0,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  29, 196, 111, 163, 112,  74,  10, 105, 105, 139, 132, 151,  32, 134,  26,
          0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  59,  13, 104, 189,  68, 209,  30,   8, 163,  65,  41, 229,  98,  50,  36,
         59,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 119,  66,  83, 120, 119,  22, 197,  83, 249,  41, 143, 134,  85,  53, 125,
         99,  79,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 239, 251, 183, 113, 149, 175, 199, 215, 240, 220,  73,  82, 173,  75,  32,
         67, 217, 146,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 194,   8,  26, 146,  20, 223, 187, 152,  85, 115, 238, 133, 146, 109, 173,
        138,  33, 172, 179,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 152, 185, 240,   5, 111,  99,   6, 220, 112, 150,  69,  36, 187,  22, 228,
        198, 121, 121, 165, 174,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  44, 243,  13, 131,  49, 132, 194,  67, 214,  28,  89, 124,  82, 158, 244,
         37, 236, 142,  82, 255,  89,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1,  89, 179, 131, 176, 182, 244,  19, 189,  69,  40,  28, 137,  29, 123,  67,
        253,  86, 218, 230,  26, 145, 245,   0,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 179,  68, 154, 163, 140, 136, 190, 152,  25,  85,  19,   3, 196,  27, 113,
        198,  18, 130,   2, 120,  93,  41,  71,   0,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 122, 118, 169,  70, 178, 237, 216, 102, 115, 150, 229,  73, 130,  72,  61,
         43, 206,   1, 237, 247, 127, 217, 144, 117,   0,   0,   0,   0,   0,   0,
    ],
    [
          1, 245,  49, 228,  53, 215,   6, 205, 210,  38,  82,  56,  80,  97, 139,  81,
        134, 126, 168,  98, 226, 125,  23, 171, 173, 193,   0,   0,   0,   0,   0,
    ],
    [
          1, 246,  51, 183,   4, 136,  98, 199, 152,  77,  56, 206,  24, 145,  40, 209,
        117, 233,  42, 135,  68,  70, 144, 146,  77,  43,  94,   0,   0,   0,   0,
    ],
    [
          1, 240,  61,  29, 145, 144, 117, 150,  48,  58, 139,  94, 134, 193, 105,  33,
        169, 202, 102, 123, 113, 195,  25, 213,   6, 152, 164, 217,   0,   0,   0,
    ],
    [
          1, 252,   9,  28,  13,  18, 251, 208, 150, 103, 174, 100,  41, 167,  12, 247,
         56, 117, 119, 233, 127, 181, 100, 121, 147, 176,  74,  58, 197,   0,   0,
    ],
    [
          1, 228, 193, 196,  48, 170,  86,  80, 217,  54, 143,  79,  32,  88, 255,  87,
         24,  15, 251,  85,  82, 201,  58, 112, 191, 153, 108, 132, 143, 170,   0,
    ],
    [
          1, 212, 246,  77,  73, 195, 192,  75,  98,   5,  70, 103, 177,  22, 217, 138,
         51, 181, 246,  72,  25,  18,  46, 228,  74, 216, 195,  11, 106, 130, 150,
    ],
];
