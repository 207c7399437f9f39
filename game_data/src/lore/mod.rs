//! Static region lore - a fixed table with no network dependency.

use serde::Serialize;

/// A region of Runeterra with its lore text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Lookup key: lowercase, unaccented.
    pub key: &'static str,
    /// Title-cased display name.
    pub name: &'static str,
    pub lore: &'static str,
}

/// Every region the assistant knows, in lookup order.
pub const REGIONS: &[Region] = &[
    Region {
        key: "noxus",
        name: "Noxus",
        lore: "Noxus é um império expansionista que valoriza força, mérito e ambição. Origem não importa: quem prova valor sobe. É uma potência militar e política, cheia de intriga, conquista e pragmatismo.",
    },
    Region {
        key: "demacia",
        name: "Demacia",
        lore: "Demacia valoriza honra, disciplina e tradição. Sua cultura é fortemente militar e desconfiada de magia. Ótima para histórias de dever, segredo e conflito ideológico.",
    },
    Region {
        key: "ionia",
        name: "Ionia",
        lore: "Ionia é espiritual e ligada ao equilíbrio natural. Tradições antigas, ordens e facções diversas. Perfeita para histórias de harmonia, resistência e poder espiritual.",
    },
    Region {
        key: "freljord",
        name: "Freljord",
        lore: "Freljord é um território gelado de clãs, sobrevivência e deuses antigos. Conflitos tribais e a brutalidade do inverno moldam tudo.",
    },
    Region {
        key: "shurima",
        name: "Shurima",
        lore: "Shurima é deserto, ruínas de impérios e lendas de Ascensão. Exploração, relíquias e forças antigas são o coração da região.",
    },
    Region {
        key: "targon",
        name: "Targon",
        lore: "Targon trata de fé, provações e o domínio celestial. A montanha e seus Aspectos conectam mortais ao cosmo e a forças superiores.",
    },
    Region {
        key: "ixtal",
        name: "Ixtal",
        lore: "Ixtal é isolada e dominadora de magias elementais e tradição. Selva, segredo e maestria elemental definem sua identidade.",
    },
    Region {
        key: "piltover",
        name: "Piltover",
        lore: "Piltover é a cidade do progresso: ciência, invenção, comércio e influência. Brilho, status e tecnologia movem suas histórias.",
    },
    Region {
        key: "zaun",
        name: "Zaun",
        lore: "Zaun é a cidade subterrânea: química, risco e desigualdade. Onde Piltover brilha, Zaun sobrevive e se transforma.",
    },
    Region {
        key: "bandopolis",
        name: "Bandopolis",
        lore: "Bandópolis é o lar yordle: magia leve, atalhos impossíveis e travessuras. Realidade flexível e humor perigoso.",
    },
    Region {
        key: "ilhas das sombras",
        name: "Ilhas Das Sombras",
        lore: "As Ilhas das Sombras são ruína e névoa: mortos-vivos, maldições e horror. Histórias de perda, vingança e sobrevivência.",
    },
    Region {
        key: "vazio",
        name: "Vazio",
        lore: "O Vazio é uma ameaça alienígena que consome e corrompe. Terror cósmico, invasão e mutação definem essa força.",
    },
];

/// Look up a region by its exact key.
pub fn region_by_key(key: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.key == key)
}
