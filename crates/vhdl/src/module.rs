//! VHDL ROM module writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lutsmith_lut::{LutConfig, TableEntry};

use crate::error::{EmitError, Result};

/// Module name in the `<prefix>_<entries>_<width>bit` convention
pub fn default_module_name(prefix: &str, config: &LutConfig) -> String {
    format!(
        "{}_{}_{}bit",
        prefix,
        config.num_entries(),
        config.output.total_width()
    )
}

/// A ROM module ready to serialize: name, declared widths, and the full
/// ordered table.
pub struct RomModule<'a> {
    name: String,
    config: LutConfig,
    entries: &'a [TableEntry],
}

impl<'a> RomModule<'a> {
    /// Build a module over a complete table.
    ///
    /// `entries` must hold exactly one row per input address; partial
    /// tables are refused.
    pub fn new(
        name: impl Into<String>,
        config: LutConfig,
        entries: &'a [TableEntry],
    ) -> Result<Self> {
        let expected = config.num_entries();
        if entries.len() as u64 != expected {
            return Err(EmitError::IncompleteTable {
                expected,
                got: entries.len() as u64,
            });
        }
        Ok(Self {
            name: name.into(),
            config,
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialize the module into `w`.
    ///
    /// Each table row becomes one aggregate line with a trace comment
    /// pairing the decoded input and the truncated output. The comments
    /// are documentary; the addressable contract is the aggregate itself.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<()> {
        let input_width = self.config.input.total_width();
        let output_width = self.config.output.total_width();

        writeln!(w, "library IEEE;")?;
        writeln!(w, "  use IEEE.std_logic_1164.all;")?;
        writeln!(w, "  use IEEE.numeric_std.all;")?;
        writeln!(w)?;
        writeln!(w, "entity {} is", self.name)?;
        writeln!(w, "  port (")?;
        writeln!(
            w,
            "    address  : in  std_logic_vector({} downto 0);",
            input_width - 1
        )?;
        writeln!(
            w,
            "    data_out : out std_logic_vector({} downto 0)",
            output_width - 1
        )?;
        writeln!(w, "  );")?;
        writeln!(w, "end entity;")?;
        writeln!(w)?;
        writeln!(w, "architecture rtl of {} is", self.name)?;
        writeln!(w)?;
        writeln!(
            w,
            "  type LUT_t is array (natural range 0 to {}) of natural;",
            self.config.num_entries() - 1
        )?;
        writeln!(w, "  constant LUT: LUT_t := (")?;

        let last = self.entries.len() - 1;
        for (i, entry) in self.entries.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            let assign = format!("    {} => {}{}", entry.address, entry.quantized, sep);
            let input_note = format!(
                "({} | {})",
                entry.input.fixed_point_string(),
                entry.input.to_real()
            );
            let output_note = format!(
                "({} | {})",
                entry.output.fixed_point_string(),
                entry.output.to_real()
            );
            writeln!(w, "{:<25} -- {:<30} => {:<30}", assign, input_note, output_note)?;
        }

        writeln!(w, "  );")?;
        writeln!(w)?;
        writeln!(w, "begin")?;
        writeln!(
            w,
            "  data_out <= std_logic_vector(to_unsigned(LUT(to_integer(unsigned(address))),{}));",
            output_width
        )?;
        writeln!(w, "end architecture;")?;

        Ok(())
    }

    /// Write the module to `<dir>/<name>.vhd`, flushing before return
    pub fn write_to_file<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(format!("{}.vhd", self.name));
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutsmith_fixed_point::FixedFormat;
    use lutsmith_lut::generate;

    fn tiny_config() -> LutConfig {
        LutConfig::new(FixedFormat::new(1, 1), FixedFormat::new(1, 2))
    }

    #[test]
    fn test_default_module_name() {
        let config = LutConfig::new(FixedFormat::new(5, 6), FixedFormat::new(2, 5));
        assert_eq!(default_module_name("atan_lut", &config), "atan_lut_4096_8bit");
    }

    #[test]
    fn test_rejects_incomplete_table() {
        let config = tiny_config();
        let entries = generate(&config, f64::atan).unwrap();
        let result = RomModule::new("t", config, &entries[..4]);
        assert!(matches!(
            result,
            Err(EmitError::IncompleteTable { expected: 8, got: 4 })
        ));
    }

    #[test]
    fn test_emits_module_skeleton() {
        let config = tiny_config();
        let entries = generate(&config, f64::atan).unwrap();
        let module = RomModule::new("tiny_lut", config, &entries).unwrap();

        let mut buf = Vec::new();
        module.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("library IEEE;\n"));
        assert!(text.contains("entity tiny_lut is"));
        assert!(text.contains("address  : in  std_logic_vector(2 downto 0);"));
        assert!(text.contains("data_out : out std_logic_vector(3 downto 0)"));
        assert!(text.contains("type LUT_t is array (natural range 0 to 7) of natural;"));
        assert!(text.ends_with("end architecture;\n"));
    }

    #[test]
    fn test_last_entry_has_no_trailing_comma() {
        let config = tiny_config();
        let entries = generate(&config, f64::atan).unwrap();
        let module = RomModule::new("tiny_lut", config, &entries).unwrap();

        let mut buf = Vec::new();
        module.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let last_entry = text
            .lines()
            .find(|line| line.trim_start().starts_with("7 => "))
            .unwrap();
        let aggregate = last_entry.split("--").next().unwrap();
        assert!(!aggregate.contains(','));
    }
}
