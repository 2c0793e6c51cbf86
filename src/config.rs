//! Configuration constants and per-catalog settings for the converter.

use crate::error::{ConvertError, Result};
use std::path::PathBuf;

/// Glass codes at or below this value are catalog placeholders and are not written.
pub const GLASS_CODE_THRESHOLD: f64 = 100_000.0;

/// Conversion factor: sample thickness in mm to µm.
pub const MM_TO_UM: f64 = 1000.0;

/// Catalog CTE values are given in 1e-6/K.
pub const CTE_SCALE: f64 = 1.0e-6;

/// Decimal places kept after scaling a CTE value.
pub const CTE_DECIMALS: usize = 15;

/// Extension of the generated record files.
pub const OUTPUT_EXTENSION: &str = "yml";

/// Replacement for `*` in glass names used as file names.
pub const STAR_REPLACEMENT: &str = "star";

/// Catalog token that stands for "not provided".
pub const SENTINEL: &str = "-";

/// Resistance grade value that stands for "not provided".
pub const RESISTANCE_ABSENT: f64 = -1.0;

/// Static description of one vendor catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Short key used on the command line.
    pub key: &'static str,
    /// AGF source file.
    pub file: &'static str,
    /// Output directory for the generated records.
    pub dir: &'static str,
    /// REFERENCES string shared by every glass of the catalog.
    pub references: &'static str,
}

impl Catalog {
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(self.file)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.dir)
    }
}

/// Built-in catalogs, in the order `--all` processes them.
pub const CATALOGS: &[Catalog] = &[
    Catalog {
        key: "schott",
        file: "input/schott_2017-01-20b.agf",
        dir: "output/schott",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/schott_2017-01-20b.agf\">SCHOTT Zemax catalog 2017-01-20b</a> (obtained from <a href=\"http://www.schott.com/advanced_optics/english/download/\">http://www.schott.com</a>)<br>See also <a href=\"http://refractiveindex.info/download/data/2017/schott_2017-01-20.pdf\">SCHOTT glass data sheets</a>"#,
    },
    Catalog {
        key: "ohara",
        file: "input/ohara_2017-11-30.agf",
        dir: "output/ohara",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/ohara_2017-11-30.agf\">OHARA Zemax catalog 2017-11-30</a> (obtained from <a href=\"http://www.ohara-inc.co.jp/en/product/optical/list/\">http://www.ohara-inc.co.jp</a>)<br>See also <a href=\"http://refractiveindex.info/download/data/2017/ohara_2017-11-30.pdf\">OHARA glass data sheets</a>"#,
    },
    Catalog {
        key: "hikari",
        file: "input/nikon_2017-11.agf",
        dir: "output/hikari",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/nikon_2017-11.agf\">NIKON Zemax catalog 2017-11</a> (obtained from <a href=\"http://www.nikon.com/products/glass/lineup/materials/optical/\">http://www.nikon.com</a>)<br>See also <a href=\"http://refractiveindex.info/download/data/2017/hikari_2017-04-01.pdf\">HIKARI glass data sheets</a>"#,
    },
    Catalog {
        key: "hoya",
        file: "input/hoya_2017-04-01.agf",
        dir: "output/hoya",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/hoya_2017-04-01.agf\">HOYA Zemax catalog 2017-04-01</a> (obtained from <a href=\"http://www.hoya-opticalworld.com/english/datadownload/\">http://www.hoya-opticalworld.com</a>)"#,
    },
    Catalog {
        key: "sumita",
        file: "input/sumita_2017-02-02.agf",
        dir: "output/sumita",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/sumita_2017-02-02.agf\">SUMITA Zemax catalog 2017-02-02</a> (obtained from <a href=\"http://www.sumita-opt.co.jp/en/download/\">http://www.sumita-opt.co.jp</a>)<br>See also <a href=\"http://refractiveindex.info/download/data/2016/sumita_2016-02-01.pdf\">SUMITA optical glass data book</a>"#,
    },
    Catalog {
        key: "cdgm",
        file: "input/cdgm_2017-09.agf",
        dir: "output/cdgm",
        references: r#"<a href=\"http://refractiveindex.info/download/data/2017/cdgm_2017-09.agf\">CDGM Zemax catalog 2017-09</a> (obtained from <a href=\"http://www.cdgmgd.com/208/\">http://www.cdgmgd.com</a>)"#,
    },
];

/// Keys of all built-in catalogs.
pub fn catalog_keys() -> Vec<&'static str> {
    CATALOGS.iter().map(|c| c.key).collect()
}

/// Look up a built-in catalog by its key.
pub fn find_catalog(key: &str) -> Result<&'static Catalog> {
    CATALOGS
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| ConvertError::UnknownCatalog {
            name: key.to_string(),
            known: catalog_keys().join(", "),
        })
}
