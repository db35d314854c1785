//! Common Czech and Slovak first names shipped with the crate.
//!
//! A fuller list can be compiled from the civil registry with
//! `vokativ-cli compile` and loaded through `NameDatabase::from_archive`.

/// Registered as masculine.
pub const MALE_NAMES: &[&str] = &[
    // Czech
    "adam", "alexandr", "aleš", "alois", "antonín", "bedřich", "bohumil", "bohuslav",
    "bořivoj", "břetislav", "ctibor", "čeněk", "dalibor", "daniel", "david", "denis",
    "dominik", "dušan", "eduard", "emil", "erik", "evžen", "filip", "františek",
    "hugo", "hynek", "igor", "ivan", "ivo", "jakub", "jan", "jaromír",
    "jaroslav", "jindřich", "jiří", "josef", "kamil", "karel", "kryštof", "ladislav",
    "leoš", "libor", "lubomír", "luboš", "ludvík", "lukáš", "marek", "martin",
    "matěj", "matyáš", "max", "michal", "milan", "miloslav", "miloš", "miroslav",
    "oldřich", "ondřej", "otakar", "patrik", "pavel", "petr", "přemysl", "radek",
    "radim", "radomír", "radoslav", "richard", "robert", "roman", "rostislav", "rudolf",
    "samuel", "sebastián", "stanislav", "svatopluk", "šimon", "štěpán", "tadeáš", "tomáš",
    "václav", "viktor", "vilém", "vít", "vítězslav", "vladimír", "vladislav", "vlastimil",
    "vojtěch", "vratislav", "zbyněk", "zdeněk",
    // Slovak
    "andrej", "branislav", "dávid", "ján", "jozef", "juraj", "ľubomír", "ľuboš",
    "marián", "matúš", "ondrej", "peter", "róbert", "štefan", "tibor",
    // Both genders
    "nikola", "saša",
];

/// Registered as feminine.
pub const FEMALE_NAMES: &[&str] = &[
    // Czech
    "adéla", "agáta", "alena", "andrea", "anežka", "anna", "barbora", "blanka",
    "božena", "dagmar", "dana", "daniela", "denisa", "dominika", "drahomíra", "eliška",
    "ema", "eva", "gabriela", "hana", "helena", "irena", "iva", "ivana",
    "iveta", "jana", "jarmila", "jaroslava", "jiřina", "jitka", "julie", "karolína",
    "kateřina", "klára", "kristýna", "lenka", "libuše", "lucie", "ludmila", "magdaléna",
    "marcela", "marie", "markéta", "martina", "michaela", "milada", "miroslava", "monika",
    "natálie", "nela", "olga", "pavla", "petra", "radka", "renata", "romana",
    "sandra", "simona", "sofie", "soňa", "stanislava", "šárka", "tereza", "vanda",
    "věra", "veronika", "viktorie", "vlasta", "zdeňka", "zuzana",
    // Slovak
    "alžbeta", "emília", "janka", "katarína", "ľudmila", "mária", "silvia", "viera",
    "zora", "žofia",
    // Both genders
    "nikola", "saša",
];
