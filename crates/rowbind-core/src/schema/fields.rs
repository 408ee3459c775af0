use super::{Field, FieldDef, Tag};

/// The ordered descriptor set of one record type, plus its key subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    fields: Vec<Field>,

    /// Indices into `fields` of the primary-key fields, in declaration order
    key: Vec<usize>,
}

impl Fields {
    /// Builds descriptors from a record's accessor table.
    pub fn scan(defs: &[FieldDef]) -> Fields {
        let mut fields = Vec::with_capacity(defs.len());
        let mut key = vec![];

        for (index, def) in defs.iter().enumerate() {
            let tag = def.tag.map(Tag::parse).unwrap_or_default();

            let field = Field {
                index,
                name: def.name,
                column: tag.column_or(def.name).to_string(),
                primary_key: def.primary_key || tag.primary_key,
                auto: def.auto || tag.auto,
                ty: def.ty,
                nullable: def.nullable,
            };

            if field.primary_key {
                key.push(fields.len());
            }

            fields.push(field);
        }

        Fields { fields, key }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.iter()
    }

    /// The primary-key fields, in declaration order.
    pub fn key(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.key.iter().map(|i| &self.fields[*i])
    }

    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    /// Fields that are not part of the primary key.
    pub fn non_key(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.primary_key)
    }

    /// Fields whose values are written by the database.
    pub fn auto(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.auto)
    }

    /// Column names, optionally including the primary key.
    pub fn columns(&self, include_keys: bool) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| include_keys || !field.primary_key)
            .map(|field| &field.column[..])
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
