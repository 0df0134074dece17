use serde::Serialize;

/// One Brazilian federative unit.
///
/// The `uf` code is lowercase, matching the convention used in the output
/// filenames (`SIH_<uf>_<YYYYMM>_...`); the DataSUS FTP filenames use the
/// uppercase form, derived where needed.
#[derive(Debug, Serialize)]
pub struct StateInfo {
    pub uf: &'static str,        // e.g. "sp"
    pub name: &'static str,      // e.g. "São Paulo"
    pub ibge_code: &'static str, // e.g. "35"
}

pub const STATES: &[StateInfo] = &[
    StateInfo {
        uf: "ac",
        name: "Acre",
        ibge_code: "12",
    },
    StateInfo {
        uf: "al",
        name: "Alagoas",
        ibge_code: "27",
    },
    StateInfo {
        uf: "ap",
        name: "Amapá",
        ibge_code: "16",
    },
    StateInfo {
        uf: "am",
        name: "Amazonas",
        ibge_code: "13",
    },
    StateInfo {
        uf: "ba",
        name: "Bahia",
        ibge_code: "29",
    },
    StateInfo {
        uf: "ce",
        name: "Ceará",
        ibge_code: "23",
    },
    StateInfo {
        uf: "df",
        name: "Distrito Federal",
        ibge_code: "53",
    },
    StateInfo {
        uf: "es",
        name: "Espírito Santo",
        ibge_code: "32",
    },
    StateInfo {
        uf: "go",
        name: "Goiás",
        ibge_code: "52",
    },
    StateInfo {
        uf: "ma",
        name: "Maranhão",
        ibge_code: "21",
    },
    StateInfo {
        uf: "mt",
        name: "Mato Grosso",
        ibge_code: "51",
    },
    StateInfo {
        uf: "ms",
        name: "Mato Grosso do Sul",
        ibge_code: "50",
    },
    StateInfo {
        uf: "mg",
        name: "Minas Gerais",
        ibge_code: "31",
    },
    StateInfo {
        uf: "pa",
        name: "Pará",
        ibge_code: "15",
    },
    StateInfo {
        uf: "pb",
        name: "Paraíba",
        ibge_code: "25",
    },
    StateInfo {
        uf: "pr",
        name: "Paraná",
        ibge_code: "41",
    },
    StateInfo {
        uf: "pe",
        name: "Pernambuco",
        ibge_code: "26",
    },
    StateInfo {
        uf: "pi",
        name: "Piauí",
        ibge_code: "22",
    },
    StateInfo {
        uf: "rj",
        name: "Rio de Janeiro",
        ibge_code: "33",
    },
    StateInfo {
        uf: "rn",
        name: "Rio Grande do Norte",
        ibge_code: "24",
    },
    StateInfo {
        uf: "rs",
        name: "Rio Grande do Sul",
        ibge_code: "43",
    },
    StateInfo {
        uf: "ro",
        name: "Rondônia",
        ibge_code: "11",
    },
    StateInfo {
        uf: "rr",
        name: "Roraima",
        ibge_code: "14",
    },
    StateInfo {
        uf: "sc",
        name: "Santa Catarina",
        ibge_code: "42",
    },
    StateInfo {
        uf: "sp",
        name: "São Paulo",
        ibge_code: "35",
    },
    StateInfo {
        uf: "se",
        name: "Sergipe",
        ibge_code: "28",
    },
    StateInfo {
        uf: "to",
        name: "Tocantins",
        ibge_code: "17",
    },
];
