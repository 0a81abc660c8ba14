//! Per-document transformation.

use crate::plan::MappingPlan;
use es_reindex_csv_source::SideData;
use es_reindex_jsonl_source::EsDocument;
use rand::rngs::StdRng;
use rand::Rng;
use reindex_core::{extract, insert, Document, DottedPath, Result};
use reindex_generator::FieldGenerator;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Applies a [`MappingPlan`] to documents, one at a time.
pub struct Transformer<'a, R = StdRng> {
    plan: &'a MappingPlan,
    side_data: Option<&'a SideData>,
    generator: FieldGenerator<'a, R>,
}

impl<'a, R: Rng> Transformer<'a, R> {
    pub fn new(plan: &'a MappingPlan, side_data: Option<&'a SideData>, rng: R) -> Self {
        Self {
            plan,
            side_data,
            generator: FieldGenerator::new(&plan.random, rng),
        }
    }

    /// Build the reindexed form of `doc`.
    ///
    /// The output `_source` starts empty and the four categories are applied
    /// in a fixed order, each overwriting earlier ones at the same path:
    /// `field_mapping`, then `default_values`, then `random_generate`, then
    /// the side-data join.
    pub fn transform(&mut self, doc: &EsDocument) -> Result<EsDocument> {
        let mut source = Document::new();

        self.apply_renames(&doc.source, &mut source)?;
        self.apply_defaults(&mut source)?;
        self.apply_random(&mut source)?;
        self.apply_side_data(doc.id.as_deref(), &mut source)?;

        Ok(EsDocument::reindexed(doc, self.plan.index.clone(), source))
    }

    fn apply_renames(&self, input: &Document, output: &mut Document) -> Result<()> {
        for (target, source) in &self.plan.renames {
            // Absent sources leave no trace in the output.
            if let Some(value) = extract(input, source).to_value() {
                insert(output, target, value)?;
            }
        }
        Ok(())
    }

    fn apply_defaults(&self, output: &mut Document) -> Result<()> {
        for (target, value) in &self.plan.defaults {
            insert(output, target, value.clone())?;
        }
        Ok(())
    }

    fn apply_random(&mut self, output: &mut Document) -> Result<()> {
        for (target, value) in self.generator.generate_fields() {
            insert(output, target, value)?;
        }
        Ok(())
    }

    fn apply_side_data(&self, id: Option<&str>, output: &mut Document) -> Result<()> {
        let (Some(side_data), Some(id)) = (self.side_data, id) else {
            return Ok(());
        };
        let Some(row) = side_data.get(id) else {
            debug!("No side-data row for document {id}");
            return Ok(());
        };
        for (field, value) in row.iter() {
            insert(
                output,
                &DottedPath::parse(field),
                JsonValue::String(value.to_string()),
            )?;
        }
        Ok(())
    }
}
