//! Rendering extraction results.

use std::io::{self, Write};

use mc_summon::command::LocationArg;
use mc_summon::{AttributeOp, EntityExtraction, FieldError, ItemExtraction, SummonCommand};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Everything a run produced, in the shape printed as JSON.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Entity(&'a EntityExtraction),
    Item(&'a ItemExtraction),
    Command {
        command: &'a SummonCommand,
        position: [f64; 3],
        #[serde(flatten)]
        summoned: Box<Report<'a>>,
    },
}

pub fn write_report(out: &mut impl Write, format: OutputFormat, report: &Report<'_>) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
        OutputFormat::Text => write_text(out, report),
    }
}

fn write_text(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    match report {
        Report::Entity(entity) => {
            write_ops(out, &entity.ops)?;
            write_warnings(out, &entity.warnings)
        }
        Report::Item(item) => {
            writeln!(out, "material: {}", item.material)?;
            writeln!(out, "amount: {}", item.amount)?;
            write_ops(out, &item.ops)?;
            write_warnings(out, &item.warnings)
        }
        Report::Command {
            command,
            position,
            summoned,
        } => {
            writeln!(out, "entity: {}", command.entity)?;
            if let LocationArg::Explicit { world, x, y, z } = &command.location {
                writeln!(out, "location: {world} {x} {y} {z}")?;
            }
            let [x, y, z] = position;
            writeln!(out, "position: {x} {y} {z}")?;
            write_text(out, summoned)
        }
    }
}

fn write_ops(out: &mut impl Write, ops: &[AttributeOp]) -> io::Result<()> {
    if ops.is_empty() {
        return writeln!(out, "(no operations)");
    }
    for op in ops {
        write_op(out, op)?;
    }
    Ok(())
}

fn write_op(out: &mut impl Write, op: &AttributeOp) -> io::Result<()> {
    match op {
        AttributeOp::SetDisplayName(name) => writeln!(out, "display_name = {}", name.to_ansi()),
        AttributeOp::SetLore(lines) => {
            writeln!(out, "lore =")?;
            for line in lines {
                writeln!(out, "  {}", line.to_ansi())?;
            }
            Ok(())
        }
        AttributeOp::SetEnchantment {
            enchantment,
            level,
            allow_unsafe,
        } => {
            let suffix = if *allow_unsafe { " (unsafe)" } else { "" };
            writeln!(out, "enchantment {} = {level}{suffix}", enchantment.canonical_name())
        }
        AttributeOp::SetBoolFlag { flag, value } => writeln!(out, "{} = {value}", flag.name()),
        AttributeOp::SetIntProperty { value, .. } => writeln!(out, "{} = {value}", op.attribute()),
        AttributeOp::SetHideFlagsBitmask(flags) => {
            let names: Vec<_> = flags.flags().map(|flag| flag.name()).collect();
            writeln!(out, "hide_flags = {} [{}]", flags.bits(), names.join(", "))
        }
        AttributeOp::SetCustomModelData(data) => writeln!(out, "custom_model_data = {data}"),
    }
}

fn write_warnings(out: &mut impl Write, warnings: &[FieldError]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mc_summon::{BoolFlag, Enchantment, Extractor, HideFlags, parse_summon_line};
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(format: OutputFormat, report: &Report<'_>) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, format, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_item_text() {
        let item = Extractor::new()
            .item_from_str(r#"{"id": "bow", "count": 2, "tag": {"HideFlags": "x", "Enchantments": [{"id": "power", "lvl": 3}]}}"#)
            .unwrap();

        assert_eq!(
            render(OutputFormat::Text, &Report::Item(&item)),
            "material: BOW\n\
             amount: 2\n\
             enchantment POWER = 3 (unsafe)\n\
             warning: tag.HideFlags: expected an integer\n"
        );
    }

    #[test]
    fn test_op_lines() {
        let ops = [
            AttributeOp::flag(BoolFlag::Glowing, true),
            AttributeOp::SetHideFlagsBitmask(HideFlags::ENCHANTS | HideFlags::DYE),
            AttributeOp::enchant(Enchantment::Mending, 1),
            AttributeOp::SetCustomModelData(9),
        ];
        let mut buf = Vec::new();
        write_ops(&mut buf, &ops).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "glowing = true\n\
             hide_flags = 33 [hide_enchants, hide_dye]\n\
             enchantment MENDING = 1 (unsafe)\n\
             custom_model_data = 9\n"
        );
    }

    #[test]
    fn test_command_json() {
        let command = parse_summon_line(r#"pig world 1 ~2 3 {"NoGravity": 1}"#).unwrap();
        let entity = command.extract_entity(&Extractor::new()).unwrap();
        let report = Report::Command {
            command: &command,
            position: command.location.resolve([0.0, 60.0, 0.0]),
            summoned: Box::new(Report::Entity(&entity)),
        };

        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json, &report)).unwrap();
        assert_eq!(json["command"]["entity"], "PIG");
        assert_eq!(json["position"], serde_json::json!([1.0, 62.0, 3.0]));
        assert_eq!(
            json["ops"],
            serde_json::json!([{"op": "set_bool_flag", "value": {"flag": "gravity", "value": false}}])
        );
    }
}
