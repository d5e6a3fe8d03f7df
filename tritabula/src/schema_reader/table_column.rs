use crate::postgres_client_wrapper::FromRow;
use crate::schema_reader::define_working_query;
use tokio_postgres::Row;

/// One row of column metadata, exactly as the database reported it.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct RawColumnRow {
    pub schema_name: String,
    pub table_name: String,
    pub column_name: String,
    pub column_type: String,
    pub column_key: String,
    pub is_nullable: Option<String>,
    pub column_default: Option<String>,
    pub comment: Option<String>,
}

impl FromRow for RawColumnRow {
    fn from_row(row: Row) -> crate::Result<Self> {
        Ok(RawColumnRow {
            schema_name: row.try_get(0)?,
            table_name: row.try_get(1)?,
            column_name: row.try_get(2)?,
            column_type: row.try_get(3)?,
            column_key: row.try_get(4)?,
            is_nullable: row.try_get(5)?,
            column_default: row.try_get(6)?,
            comment: row.try_get(7)?,
        })
    }
}

// The key column follows the mysql convention: PRI for primary key members, UNI for
// unique indices with a single key column and MUL for the leading column of any other index.
// INCLUDE columns of a covering index are not key columns.
//language=postgresql
const COLUMN_ROWS_QUERY: &str = r#"
select ns.nspname::text,
       cl.relname::text,
       attr.attname::text,
       format_type(attr.atttypid, attr.atttypmod)                             as column_type,
       coalesce((select case
                            when i.indisprimary then 'PRI'
                            when i.indisunique and i.indnkeyatts = 1 then 'UNI'
                            else 'MUL'
                            end
                 from pg_index i
                 where i.indrelid = cl.oid
                   and (i.indkey[0] = attr.attnum or (i.indisprimary and attr.attnum = any (i.indkey::int2[])))
                 order by i.indisprimary desc, (i.indisunique and i.indnkeyatts = 1) desc
                 limit 1), '')                                                as column_key,
       case when attr.attnotnull then 'NO' else 'YES' end                     as is_nullable,
       pg_get_expr(ad.adbin, ad.adrelid)                                      as column_default,
       des.description                                                        as column_comment
from pg_attribute attr
         join pg_class cl on attr.attrelid = cl.oid
         join pg_namespace ns on ns.oid = cl.relnamespace
         left join pg_attrdef ad on attr.attrelid = ad.adrelid and attr.attnum = ad.adnum
         left join pg_description des
                   on des.objoid = cl.oid and des.objsubid = attr.attnum and des.classoid = 'pg_class'::regclass
where cl.relkind in ('r', 'p')
  and attr.attnum > 0
  and not attr.attisdropped
  and ns.nspname = $1
order by cl.relname, attr.attnum;
"#;

define_working_query!(get_column_rows, COLUMN_ROWS_QUERY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_key_ignores_included_columns() {
        assert!(COLUMN_ROWS_QUERY.contains("when i.indisunique and i.indnkeyatts = 1 then 'UNI'"));
        assert!(!COLUMN_ROWS_QUERY.contains("indnatts"));
    }

    #[test]
    fn rows_come_in_table_then_column_order() {
        assert!(COLUMN_ROWS_QUERY
            .trim_end()
            .ends_with("order by cl.relname, attr.attnum;"));
    }
}
