//! Built-in English tables.
//!
//! Entries are `(word, polarity, subjectivity)`. Values follow the scale of
//! the common adjective-centred sentiment lexicons: strong evaluative words
//! sit near ±1 with high subjectivity, descriptive words carry less of both.

pub(crate) const ENTRIES: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("superb", 1.0, 1.0),
    ("outstanding", 0.5, 0.75),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0),
    ("pleasant", 0.73, 0.97),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("delighted", 0.7, 0.7),
    ("pleased", 0.5, 1.0),
    ("satisfied", 0.5, 1.0),
    ("enjoyable", 0.5, 0.6),
    ("fun", 0.3, 0.2),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("loves", 0.5, 0.6),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("recommend", 0.4, 0.4),
    ("recommended", 0.4, 0.4),
    ("impressive", 1.0, 1.0),
    ("impressed", 0.6, 0.8),
    ("fast", 0.2, 0.6),
    ("quick", 0.33, 0.5),
    ("easy", 0.43, 0.83),
    ("helpful", 0.5, 0.5),
    ("friendly", 0.38, 0.5),
    ("reliable", 0.5, 0.6),
    ("comfortable", 0.4, 0.7),
    ("clean", 0.37, 0.69),
    ("fresh", 0.3, 0.5),
    ("smooth", 0.4, 0.6),
    ("solid", 0.35, 0.45),
    ("sturdy", 0.4, 0.5),
    ("affordable", 0.4, 0.6),
    ("cheap", 0.4, 0.7),
    ("valuable", 0.5, 0.6),
    ("useful", 0.3, 0.0),
    ("positive", 0.23, 0.55),
    ("successful", 0.75, 0.95),
    ("success", 0.6, 0.5),
    ("win", 0.8, 0.4),
    ("winning", 0.5, 0.75),
    ("strong", 0.43, 0.73),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("incredible", 0.9, 0.9),
    ("exceptional", 0.67, 1.0),
    ("remarkable", 0.75, 0.75),
    ("terrific", 1.0, 1.0),
    ("marvelous", 0.8, 1.0),
    ("fabulous", 0.4, 0.8),
    ("gorgeous", 0.7, 1.0),
    ("elegant", 0.5, 0.75),
    ("exciting", 0.3, 0.8),
    ("excited", 0.38, 0.75),
    ("interesting", 0.5, 0.5),
    ("cool", 0.35, 0.65),
    ("pretty", 0.25, 1.0),
    ("fine", 0.42, 0.5),
    ("okay", 0.5, 0.5),
    ("decent", 0.17, 0.67),
    ("right", 0.29, 0.54),
    ("safe", 0.5, 0.5),
    ("calm", 0.3, 0.75),
    ("kind", 0.6, 0.9),
    ("polite", 0.3, 0.7),
    ("generous", 0.35, 0.55),
    ("honest", 0.6, 0.9),
    ("thankful", 0.5, 0.8),
    ("grateful", 0.5, 0.8),
    ("thanks", 0.2, 0.2),
    ("smart", 0.21, 0.64),
    ("clever", 0.5, 0.75),
    ("fair", 0.7, 0.9),
    ("flawless", 1.0, 1.0),
    ("joy", 0.8, 0.8),
    ("hope", 0.2, 0.4),
    ("improved", 0.4, 0.4),
    ("works", 0.2, 0.1),
    ("worth", 0.3, 0.1),
    // negative
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("disappointment", -0.6, 0.7),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("annoyed", -0.6, 0.8),
    ("frustrating", -0.4, 0.6),
    ("frustrated", -0.7, 0.7),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("hates", -0.8, 0.9),
    ("dislike", -0.5, 0.6),
    ("broken", -0.4, 0.4),
    ("broke", -0.4, 0.4),
    ("damaged", -0.5, 0.4),
    ("defective", -0.6, 0.4),
    ("faulty", -0.6, 0.4),
    ("useless", -0.5, 0.2),
    ("worthless", -0.8, 0.8),
    ("slow", -0.3, 0.4),
    ("expensive", -0.5, 0.7),
    ("overpriced", -0.6, 0.8),
    ("dirty", -0.6, 0.8),
    ("ugly", -0.7, 1.0),
    ("boring", -1.0, 1.0),
    ("dull", -0.31, 0.69),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.38, 0.5),
    ("rude", -0.6, 0.9),
    ("unfriendly", -0.5, 0.7),
    ("unreliable", -0.5, 0.6),
    ("uncomfortable", -0.5, 0.8),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("wrong", -0.5, 0.9),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("fails", -0.5, 0.3),
    ("problem", -0.3, 0.3),
    ("problems", -0.3, 0.3),
    ("issue", -0.2, 0.2),
    ("issues", -0.2, 0.2),
    ("bug", -0.3, 0.2),
    ("buggy", -0.5, 0.5),
    ("crash", -0.5, 0.3),
    ("crashes", -0.5, 0.3),
    ("error", -0.3, 0.2),
    ("pathetic", -1.0, 1.0),
    ("disgusting", -1.0, 1.0),
    ("nasty", -1.0, 1.0),
    ("miserable", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("scary", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("worried", -0.5, 0.8),
    ("weak", -0.38, 0.69),
    ("negative", -0.3, 0.4),
    ("mediocre", -0.5, 0.7),
    ("lousy", -0.8, 1.0),
    ("crappy", -0.8, 0.9),
    ("junk", -0.6, 0.6),
    ("waste", -0.2, 0.3),
    ("wasted", -0.2, 0.3),
    ("late", -0.3, 0.6),
    ("missing", -0.2, 0.05),
    ("noisy", -0.3, 0.6),
    ("confusing", -0.3, 0.6),
    ("confused", -0.4, 0.7),
    ("complicated", -0.4, 0.6),
    ("unusable", -0.7, 0.6),
    ("unacceptable", -0.8, 0.8),
    ("ridiculous", -0.33, 0.67),
    ("sorry", -0.5, 1.0),
    ("regret", -0.5, 0.6),
    ("refund", -0.1, 0.1),
    ("cheaply", -0.3, 0.5),
    ("flimsy", -0.5, 0.6),
    ("sick", -0.71, 0.86),
    ("dead", -0.2, 0.4),
    ("lost", -0.2, 0.1),
];

/// Degree adverbs. Values multiply the polarity and subjectivity of the
/// sentiment word they modify.
pub(crate) const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("exceptionally", 1.5),
    ("utterly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("completely", 1.3),
    ("highly", 1.3),
    ("super", 1.3),
    ("remarkably", 1.3),
    ("truly", 1.2),
    ("too", 1.2),
    ("particularly", 1.2),
    ("especially", 1.2),
    ("most", 1.2),
    ("pretty", 1.1),
    ("quite", 1.1),
    ("rather", 0.9),
    ("fairly", 0.8),
    ("moderately", 0.8),
    ("somewhat", 0.7),
    ("kinda", 0.7),
    ("mildly", 0.6),
    ("slightly", 0.5),
    ("barely", 0.4),
    ("hardly", 0.4),
];

pub(crate) const NEGATORS: &[&str] = &[
    "not", "n't", "no", "never", "neither", "nor", "nobody", "none", "nothing", "nowhere",
    "without", "cannot",
];
