// A table of byte frequency ranks. The higher the value, the more common the
// byte (heuristically speaking). The ranking here was derived from rough
// byte counts over a mixed corpus of English prose and source code, and then
// smoothed by hand. Exact values don't matter much; the prefilter heuristics
// only care about relative order.
pub const BYTE_FREQUENCIES: [u8; 256] = [
    157, // 0x00
    156, // 0x01
    155, // 0x02
    154, // 0x03
    153, // 0x04
    152, // 0x05
    151, // 0x06
    150, // 0x07
    149, // 0x08
    230, // '\t'
    232, // '\n'
    148, // 0x0B
    147, // 0x0C
    231, // '\r'
    146, // 0x0E
    145, // 0x0F
    144, // 0x10
    143, // 0x11
    142, // 0x12
    141, // 0x13
    140, // 0x14
    139, // 0x15
    138, // 0x16
    137, // 0x17
    136, // 0x18
    135, // 0x19
    134, // 0x1A
    133, // 0x1B
    132, // 0x1C
    131, // 0x1D
    130, // 0x1E
    129, // 0x1F
    255, // ' '
    169, // '!'
    192, // '"'
    171, // '#'
    172, // '$'
    173, // '%'
    175, // '&'
    193, // '\''
    189, // '('
    188, // ')'
    176, // '*'
    177, // '+'
    196, // ','
    191, // '-'
    197, // '.'
    181, // '/'
    207, // '0'
    206, // '1'
    205, // '2'
    204, // '3'
    203, // '4'
    202, // '5'
    201, // '6'
    200, // '7'
    199, // '8'
    198, // '9'
    194, // ':'
    195, // ';'
    183, // '<'
    178, // '='
    182, // '>'
    168, // '?'
    170, // '@'
    227, // 'A'
    210, // 'B'
    218, // 'C'
    219, // 'D'
    229, // 'E'
    215, // 'F'
    213, // 'G'
    221, // 'H'
    225, // 'I'
    160, // 'J'
    208, // 'K'
    220, // 'L'
    216, // 'M'
    224, // 'N'
    226, // 'O'
    214, // 'P'
    159, // 'Q'
    222, // 'R'
    223, // 'S'
    228, // 'T'
    217, // 'U'
    209, // 'V'
    212, // 'W'
    161, // 'X'
    211, // 'Y'
    158, // 'Z'
    187, // '['
    180, // '\\'
    186, // ']'
    174, // '^'
    190, // '_'
    166, // '`'
    252, // 'a'
    235, // 'b'
    243, // 'c'
    244, // 'd'
    254, // 'e'
    240, // 'f'
    238, // 'g'
    246, // 'h'
    250, // 'i'
    164, // 'j'
    233, // 'k'
    245, // 'l'
    241, // 'm'
    249, // 'n'
    251, // 'o'
    239, // 'p'
    163, // 'q'
    247, // 'r'
    248, // 's'
    253, // 't'
    242, // 'u'
    234, // 'v'
    237, // 'w'
    165, // 'x'
    236, // 'y'
    162, // 'z'
    185, // '{'
    179, // '|'
    184, // '}'
    167, // '~'
    128, // 0x7F
    127, // 0x80
    126, // 0x81
    125, // 0x82
    124, // 0x83
    123, // 0x84
    122, // 0x85
    121, // 0x86
    120, // 0x87
    119, // 0x88
    118, // 0x89
    117, // 0x8A
    116, // 0x8B
    115, // 0x8C
    114, // 0x8D
    113, // 0x8E
    112, // 0x8F
    111, // 0x90
    110, // 0x91
    109, // 0x92
    108, // 0x93
    107, // 0x94
    106, // 0x95
    105, // 0x96
    104, // 0x97
    103, // 0x98
    102, // 0x99
    101, // 0x9A
    100, // 0x9B
    99, // 0x9C
    98, // 0x9D
    97, // 0x9E
    96, // 0x9F
    95, // 0xA0
    94, // 0xA1
    93, // 0xA2
    92, // 0xA3
    91, // 0xA4
    90, // 0xA5
    89, // 0xA6
    88, // 0xA7
    87, // 0xA8
    86, // 0xA9
    85, // 0xAA
    84, // 0xAB
    83, // 0xAC
    82, // 0xAD
    81, // 0xAE
    80, // 0xAF
    79, // 0xB0
    78, // 0xB1
    77, // 0xB2
    76, // 0xB3
    75, // 0xB4
    74, // 0xB5
    73, // 0xB6
    72, // 0xB7
    71, // 0xB8
    70, // 0xB9
    69, // 0xBA
    68, // 0xBB
    67, // 0xBC
    66, // 0xBD
    65, // 0xBE
    64, // 0xBF
    63, // 0xC0
    62, // 0xC1
    61, // 0xC2
    60, // 0xC3
    59, // 0xC4
    58, // 0xC5
    57, // 0xC6
    56, // 0xC7
    55, // 0xC8
    54, // 0xC9
    53, // 0xCA
    52, // 0xCB
    51, // 0xCC
    50, // 0xCD
    49, // 0xCE
    48, // 0xCF
    47, // 0xD0
    46, // 0xD1
    45, // 0xD2
    44, // 0xD3
    43, // 0xD4
    42, // 0xD5
    41, // 0xD6
    40, // 0xD7
    39, // 0xD8
    38, // 0xD9
    37, // 0xDA
    36, // 0xDB
    35, // 0xDC
    34, // 0xDD
    33, // 0xDE
    32, // 0xDF
    31, // 0xE0
    30, // 0xE1
    29, // 0xE2
    28, // 0xE3
    27, // 0xE4
    26, // 0xE5
    25, // 0xE6
    24, // 0xE7
    23, // 0xE8
    22, // 0xE9
    21, // 0xEA
    20, // 0xEB
    19, // 0xEC
    18, // 0xED
    17, // 0xEE
    16, // 0xEF
    15, // 0xF0
    14, // 0xF1
    13, // 0xF2
    12, // 0xF3
    11, // 0xF4
    10, // 0xF5
    9, // 0xF6
    8, // 0xF7
    7, // 0xF8
    6, // 0xF9
    5, // 0xFA
    4, // 0xFB
    3, // 0xFC
    2, // 0xFD
    1, // 0xFE
    0, // 0xFF
];
