//! This file provides the fixed table of CSS named colors, in both directions: names to hex for
//! parsing, and hex back to names for [`Color::to_name`](::color::Color::to_name). Both lookups are
//! built once, the first time either is used, and shared by every color afterwards.

use std::collections::HashMap;

// values copied from the CSS Color Module Level 3 keyword table, plus "burntsienna"; written in
// three-digit shorthand wherever the color allows it
const NAMED_COLOR_COUNT: usize = 149;

/// Every named color with its hex code (no leading '#'), sorted by name.
pub static NAMED_COLORS: [(&str, &str); NAMED_COLOR_COUNT] = [
    ("aliceblue", "f0f8ff"),
    ("antiquewhite", "faebd7"),
    ("aqua", "0ff"),
    ("aquamarine", "7fffd4"),
    ("azure", "f0ffff"),
    ("beige", "f5f5dc"),
    ("bisque", "ffe4c4"),
    ("black", "000"),
    ("blanchedalmond", "ffebcd"),
    ("blue", "00f"),
    ("blueviolet", "8a2be2"),
    ("brown", "a52a2a"),
    ("burlywood", "deb887"),
    ("burntsienna", "ea7e5d"),
    ("cadetblue", "5f9ea0"),
    ("chartreuse", "7fff00"),
    ("chocolate", "d2691e"),
    ("coral", "ff7f50"),
    ("cornflowerblue", "6495ed"),
    ("cornsilk", "fff8dc"),
    ("crimson", "dc143c"),
    ("cyan", "0ff"),
    ("darkblue", "00008b"),
    ("darkcyan", "008b8b"),
    ("darkgoldenrod", "b8860b"),
    ("darkgray", "a9a9a9"),
    ("darkgreen", "006400"),
    ("darkgrey", "a9a9a9"),
    ("darkkhaki", "bdb76b"),
    ("darkmagenta", "8b008b"),
    ("darkolivegreen", "556b2f"),
    ("darkorange", "ff8c00"),
    ("darkorchid", "9932cc"),
    ("darkred", "8b0000"),
    ("darksalmon", "e9967a"),
    ("darkseagreen", "8fbc8f"),
    ("darkslateblue", "483d8b"),
    ("darkslategray", "2f4f4f"),
    ("darkslategrey", "2f4f4f"),
    ("darkturquoise", "00ced1"),
    ("darkviolet", "9400d3"),
    ("deeppink", "ff1493"),
    ("deepskyblue", "00bfff"),
    ("dimgray", "696969"),
    ("dimgrey", "696969"),
    ("dodgerblue", "1e90ff"),
    ("firebrick", "b22222"),
    ("floralwhite", "fffaf0"),
    ("forestgreen", "228b22"),
    ("fuchsia", "f0f"),
    ("gainsboro", "dcdcdc"),
    ("ghostwhite", "f8f8ff"),
    ("gold", "ffd700"),
    ("goldenrod", "daa520"),
    ("gray", "808080"),
    ("green", "008000"),
    ("greenyellow", "adff2f"),
    ("grey", "808080"),
    ("honeydew", "f0fff0"),
    ("hotpink", "ff69b4"),
    ("indianred", "cd5c5c"),
    ("indigo", "4b0082"),
    ("ivory", "fffff0"),
    ("khaki", "f0e68c"),
    ("lavender", "e6e6fa"),
    ("lavenderblush", "fff0f5"),
    ("lawngreen", "7cfc00"),
    ("lemonchiffon", "fffacd"),
    ("lightblue", "add8e6"),
    ("lightcoral", "f08080"),
    ("lightcyan", "e0ffff"),
    ("lightgoldenrodyellow", "fafad2"),
    ("lightgray", "d3d3d3"),
    ("lightgreen", "90ee90"),
    ("lightgrey", "d3d3d3"),
    ("lightpink", "ffb6c1"),
    ("lightsalmon", "ffa07a"),
    ("lightseagreen", "20b2aa"),
    ("lightskyblue", "87cefa"),
    ("lightslategray", "789"),
    ("lightslategrey", "789"),
    ("lightsteelblue", "b0c4de"),
    ("lightyellow", "ffffe0"),
    ("lime", "0f0"),
    ("limegreen", "32cd32"),
    ("linen", "faf0e6"),
    ("magenta", "f0f"),
    ("maroon", "800000"),
    ("mediumaquamarine", "66cdaa"),
    ("mediumblue", "0000cd"),
    ("mediumorchid", "ba55d3"),
    ("mediumpurple", "9370db"),
    ("mediumseagreen", "3cb371"),
    ("mediumslateblue", "7b68ee"),
    ("mediumspringgreen", "00fa9a"),
    ("mediumturquoise", "48d1cc"),
    ("mediumvioletred", "c71585"),
    ("midnightblue", "191970"),
    ("mintcream", "f5fffa"),
    ("mistyrose", "ffe4e1"),
    ("moccasin", "ffe4b5"),
    ("navajowhite", "ffdead"),
    ("navy", "000080"),
    ("oldlace", "fdf5e6"),
    ("olive", "808000"),
    ("olivedrab", "6b8e23"),
    ("orange", "ffa500"),
    ("orangered", "ff4500"),
    ("orchid", "da70d6"),
    ("palegoldenrod", "eee8aa"),
    ("palegreen", "98fb98"),
    ("paleturquoise", "afeeee"),
    ("palevioletred", "db7093"),
    ("papayawhip", "ffefd5"),
    ("peachpuff", "ffdab9"),
    ("peru", "cd853f"),
    ("pink", "ffc0cb"),
    ("plum", "dda0dd"),
    ("powderblue", "b0e0e6"),
    ("purple", "800080"),
    ("rebeccapurple", "663399"),
    ("red", "f00"),
    ("rosybrown", "bc8f8f"),
    ("royalblue", "4169e1"),
    ("saddlebrown", "8b4513"),
    ("salmon", "fa8072"),
    ("sandybrown", "f4a460"),
    ("seagreen", "2e8b57"),
    ("seashell", "fff5ee"),
    ("sienna", "a0522d"),
    ("silver", "c0c0c0"),
    ("skyblue", "87ceeb"),
    ("slateblue", "6a5acd"),
    ("slategray", "708090"),
    ("slategrey", "708090"),
    ("snow", "fffafa"),
    ("springgreen", "00ff7f"),
    ("steelblue", "4682b4"),
    ("tan", "d2b48c"),
    ("teal", "008080"),
    ("thistle", "d8bfd8"),
    ("tomato", "ff6347"),
    ("turquoise", "40e0d0"),
    ("violet", "ee82ee"),
    ("wheat", "f5deb3"),
    ("white", "fff"),
    ("whitesmoke", "f5f5f5"),
    ("yellow", "ff0"),
    ("yellowgreen", "9acd32"),
];

lazy_static! {
    static ref NAMES_TO_HEX: HashMap<&'static str, &'static str> =
        NAMED_COLORS.iter().cloned().collect();
    // keyed by the full six-digit code, so a name written in shorthand and a color serialized in
    // full meet in the middle; aliases sharing a code (aqua and cyan, gray and grey) resolve to
    // whichever name sorts last
    static ref HEX_TO_NAMES: HashMap<String, &'static str> = NAMED_COLORS
        .iter()
        .map(|&(name, hex)| (expand_hex(hex), name))
        .collect();
}

// "f0a" -> "ff00aa"; anything else passes through
fn expand_hex(hex: &str) -> String {
    if hex.len() == 3 {
        hex.chars().flat_map(|c| vec![c, c]).collect()
    } else {
        hex.to_string()
    }
}

/// Looks up a color name, ignoring case and surrounding whitespace. Returns the hex code without a
/// leading '#', in shorthand where the table has it.
///
/// ```
/// # use colorselect::named::name_to_hex;
/// assert_eq!(name_to_hex("Red"), Some("f00"));
/// assert_eq!(name_to_hex("rebeccapurple"), Some("663399"));
/// assert_eq!(name_to_hex("transparent"), None);
/// ```
pub fn name_to_hex(name: &str) -> Option<&'static str> {
    NAMES_TO_HEX
        .get(name.trim().to_lowercase().as_str())
        .cloned()
}

/// Finds the name of an exact hex code, given in either three- or six-digit form without a leading
/// '#'.
pub fn hex_to_name(hex: &str) -> Option<&'static str> {
    HEX_TO_NAMES.get(&expand_hex(&hex.to_lowercase())).cloned()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_forward_lookup() {
        assert_eq!(name_to_hex("red"), Some("f00"));
        assert_eq!(name_to_hex("  AliceBlue "), Some("f0f8ff"));
        assert_eq!(name_to_hex("lightslategrey"), Some("789"));
        assert_eq!(name_to_hex("notacolor"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(hex_to_name("f00"), Some("red"));
        assert_eq!(hex_to_name("ff0000"), Some("red"));
        assert_eq!(hex_to_name("F0F8FF"), Some("aliceblue"));
        assert_eq!(hex_to_name("663399"), Some("rebeccapurple"));
        assert_eq!(hex_to_name("0ff"), Some("cyan"));
        assert_eq!(hex_to_name("808080"), Some("grey"));
        assert_eq!(hex_to_name("123456"), None);
    }
}
