use jobboard_codec::encode_list;
use jobboard_core::{
  Record,
  company::{Company, CompanyInput},
};

use super::{Entity, NAME, TAGS};
use crate::{
  Result,
  encode::{Payload, WriteMode, list, record_id, text},
};

impl Entity for Company {
  const TABLE: &'static str = "company_c";
  const NOUN: &'static str = "company";
  const FIELDS: &'static [&'static str] = &[
    "Id",
    NAME,
    "name_c",
    "description_c",
    "industry_c",
    "size_c",
    "location_c",
    "website_c",
    "jobs_c",
    TAGS,
  ];

  type Input = CompanyInput;

  fn to_domain(record: Record) -> Result<Self> {
    Ok(Self {
      id: record_id(&record, Self::NOUN)?,
      name: text(&record, &["name_c", NAME]),
      description: text(&record, &["description_c"]),
      industry: text(&record, &["industry_c"]),
      size: text(&record, &["size_c"]),
      location: text(&record, &["location_c"]),
      website: text(&record, &["website_c"]),
      jobs: text(&record, &["jobs_c"]),
      tags: list(&record, &[TAGS]),
      record,
    })
  }

  fn to_payload(input: &CompanyInput, mode: WriteMode) -> Result<Record> {
    Ok(
      Payload::new(mode)
        .field(NAME, input.name.clone(), String::new)
        .field("name_c", input.name.clone(), String::new)
        .field("description_c", input.description.clone(), String::new)
        .field("industry_c", input.industry.clone(), String::new)
        .field("size_c", input.size.clone(), String::new)
        .field("location_c", input.location.clone(), String::new)
        .field("website_c", input.website.clone(), String::new)
        .field("jobs_c", input.jobs.clone(), String::new)
        .field(TAGS, input.tags.as_deref().map(encode_list), String::new)
        .finish(),
    )
  }
}
