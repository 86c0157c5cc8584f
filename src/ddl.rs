//! Renders a resolved schema as PostgreSQL DDL.

use crate::{
    quote::{quote_ident, quote_literal, quote_name},
    resolve::{EnumType, ResolvedColumn, ResolvedSchema},
};

/// Options for the trailing psql `\copy` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCommand {
    pub source: String,
    pub header: bool,
    pub delimiter: u8,
}

impl CopyCommand {
    /// A `-` source reads from psql's own standard input.
    pub fn render(&self, table_name: &str) -> String {
        let mut params = vec!["format csv".to_string()];
        if self.header {
            params.push("header".to_string());
        }
        if self.delimiter != b',' {
            let delimiter = (self.delimiter as char).to_string();
            params.push(format!("delimiter {}", quote_literal(&delimiter)));
        }
        let source = if self.source == "-" {
            "pstdin".to_string()
        } else {
            quote_literal(&self.source)
        };
        format!(
            "\\copy {} from {} ({})\n",
            quote_name(table_name),
            source,
            params.join(", ")
        )
    }
}

pub fn render_enum_type(enum_type: &EnumType) -> String {
    let members = enum_type
        .members
        .iter()
        .map(|member| format!("  {}", quote_literal(member)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "create type {} as enum (\n{}\n);\n",
        quote_ident(&enum_type.name),
        members
    )
}

pub fn render_table(table_name: &str, columns: &[ResolvedColumn]) -> String {
    let rows = columns
        .iter()
        .map(|column| {
            let not_null = if column.nullable { "" } else { " not null" };
            format!(
                "  {} {}{}",
                quote_name(&column.name),
                quote_ident(&column.sql_type),
                not_null
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");
    format!("create table {} (\n{}\n);\n", quote_name(table_name), rows)
}

/// Enum definitions, the table definition, and an optional `\copy` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlScript {
    pub enum_ddl: Vec<String>,
    pub table_ddl: String,
    pub copy: Option<String>,
}

impl DdlScript {
    pub fn new(schema: &ResolvedSchema, copy: Option<&CopyCommand>) -> Self {
        Self {
            enum_ddl: schema.enums.iter().map(render_enum_type).collect(),
            table_ddl: render_table(&schema.table_name, &schema.columns),
            copy: copy.map(|command| command.render(&schema.table_name)),
        }
    }

    /// Sections in output order, separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in self
            .enum_ddl
            .iter()
            .chain(std::iter::once(&self.table_ddl))
            .chain(self.copy.iter())
        {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(section);
        }
        out
    }
}
