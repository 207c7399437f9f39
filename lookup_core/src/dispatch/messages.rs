//! Fixed user-facing texts.

pub const HELP: &str = "RUNETERRA • Ajuda\n\n\
Use:\n\
- /ask pergunta\n\
- /champ nome\n\
- /item nome\n\
- /region nome\n\n\
Ou me marque: @RUNETERRA 'quem é jinx', 'item gume do infinito', 'runa eletrocutar', 'feitiço flash', 'fala de noxus'.";

pub const CLARIFICATION: &str = "Entendi, mas preciso de um detalhe.\n\
Você quer: campeão, item, runa, feitiço ou região?\n\
Exemplos: 'campeão jinx', 'item gume do infinito', 'runa eletrocutar', 'feitiço flash', 'região noxus'.";

pub const CHAMPION_NOT_FOUND: &str = "Não encontrei esse campeão. Tente outro nome.";
pub const ITEM_NOT_FOUND: &str = "Não encontrei esse item. Tente outro nome.";
pub const REGION_NOT_FOUND: &str = "Não reconheci essa região. Tente: Noxus, Demacia, Ionia, etc.";

pub const GENERIC_ERROR: &str = "Deu erro aqui. Tenta de novo em alguns segundos.";
