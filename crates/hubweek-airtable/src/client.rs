//! HTTP client for the Airtable records and metadata endpoints.
//!
//! Record fetches follow the opaque `offset` continuation cursor until the
//! service stops returning one, accumulating every page in server order.
//! There are no retries: any transport error or non-2xx response fails the
//! whole call and no partial results are returned.

use hubweek_models::Record;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{AirtableError, Result};

/// Production API root.
pub const DEFAULT_API_ROOT: &str = "https://api.airtable.com/v0";

/// Table holding project records, unless overridden by configuration.
pub const DEFAULT_PROJECTS_TABLE: &str = "Home Project";

/// Table id holding designer records.
pub const DESIGNERS_TABLE: &str = "tbl5Gp0pm8poBMjMi";

/// Records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// One page of records, with the continuation cursor when more remain.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Table metadata from the schema endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TableInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "primaryFieldId", default)]
    pub primary_field_id: String,
}

/// Authenticated client for one base.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    api_root: String,
    base_id: String,
    token: String,
}

impl AirtableClient {
    /// Creates a client for the given base and personal access token.
    pub fn new(base_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: DEFAULT_API_ROOT.to_string(),
            base_id: base_id.into(),
            token: token.into(),
        }
    }

    /// Overrides the API root (local test servers).
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Fetches every record of a table, following the continuation cursor.
    pub async fn fetch_all(&self, table: &str, page_size: u32) -> Result<Vec<Record>> {
        let mut all: Vec<Record> = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut url = self.table_url(table)?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &page_size.to_string());
                if let Some(cursor) = &offset {
                    query.append_pair("offset", cursor);
                }
            }

            let page: RecordPage = serde_json::from_value(self.get_json(url).await?)?;
            offset = append_page(&mut all, page);
            if offset.is_none() {
                break;
            }
        }

        debug!(table = %table, count = all.len(), "fetched all records");
        Ok(all)
    }

    /// Fetches at most one record; a cheap access probe for diagnostics.
    pub async fn probe_table(&self, table: &str) -> Result<Vec<Record>> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut().append_pair("maxRecords", "1");

        let page: RecordPage = serde_json::from_value(self.get_json(url).await?)?;
        Ok(page.records)
    }

    /// Lists the tables of the base via the schema metadata endpoint.
    pub async fn list_tables(&self) -> Result<Vec<TableInfo>> {
        let url = self.meta_tables_url()?;
        let body = self.get_json(url).await?;

        #[derive(Deserialize)]
        struct SchemaResponse {
            #[serde(default)]
            tables: Vec<TableInfo>,
        }

        let schema: SchemaResponse = serde_json::from_value(body)?;
        debug!(count = schema.tables.len(), "listed base tables");
        Ok(schema.tables)
    }

    /// Fetches all project records from the given table.
    pub async fn fetch_projects(&self, table: &str) -> Result<Vec<Record>> {
        self.fetch_all(table, DEFAULT_PAGE_SIZE).await
    }

    /// Fetches all designer records.
    pub async fn fetch_designers(&self) -> Result<Vec<Record>> {
        self.fetch_all(DESIGNERS_TABLE, DEFAULT_PAGE_SIZE).await
    }

    /// Issues a GET with the bearer credential, failing on non-2xx.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value> {
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AirtableError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    fn table_url(&self, table: &str) -> Result<Url> {
        let mut url =
            Url::parse(&self.api_root).map_err(|e| AirtableError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| AirtableError::Url(self.api_root.clone()))?
            .push(&self.base_id)
            .push(table);
        Ok(url)
    }

    fn meta_tables_url(&self) -> Result<Url> {
        let mut url =
            Url::parse(&self.api_root).map_err(|e| AirtableError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| AirtableError::Url(self.api_root.clone()))?
            .extend(["meta", "bases", self.base_id.as_str(), "tables"]);
        Ok(url)
    }
}

/// Appends a page to the accumulator, returning the continuation cursor.
fn append_page(all: &mut Vec<Record>, page: RecordPage) -> Option<String> {
    all.extend(page.records);
    page.offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(ids: std::ops::Range<u32>, offset: Option<&str>) -> RecordPage {
        let records = ids
            .map(|i| json!({"id": format!("rec{i}"), "fields": {}}))
            .collect::<Vec<_>>();
        serde_json::from_value(json!({"records": records, "offset": offset})).unwrap()
    }

    #[test]
    fn test_record_page_deserializes_cursor() {
        let page: RecordPage =
            serde_json::from_value(json!({"records": [], "offset": "itrX/recY"})).unwrap();
        assert_eq!(page.offset.as_deref(), Some("itrX/recY"));

        let last: RecordPage = serde_json::from_value(json!({"records": []})).unwrap();
        assert!(last.offset.is_none());
    }

    #[test]
    fn test_append_page_accumulates_in_page_order() {
        let mut all = Vec::new();

        let cursor = append_page(&mut all, page(0..100, Some("next")));
        assert_eq!(cursor.as_deref(), Some("next"));
        assert_eq!(all.len(), 100);

        let cursor = append_page(&mut all, page(100..105, None));
        assert!(cursor.is_none());
        assert_eq!(all.len(), 105);
        assert_eq!(all[0].id, "rec0");
        assert_eq!(all[104].id, "rec104");
    }

    #[test]
    fn test_table_url_encodes_spaces() {
        let client = AirtableClient::new("appBase", "pat.token");
        let url = client.table_url("Home Project").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.airtable.com/v0/appBase/Home%20Project"
        );
    }

    #[test]
    fn test_meta_tables_url() {
        let client = AirtableClient::new("appBase", "pat.token");
        let url = client.meta_tables_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.airtable.com/v0/meta/bases/appBase/tables"
        );
    }

    #[test]
    fn test_table_info_field_rename() {
        let info: TableInfo = serde_json::from_value(json!({
            "id": "tbl1",
            "name": "Home Project",
            "primaryFieldId": "fld1"
        }))
        .unwrap();
        assert_eq!(info.primary_field_id, "fld1");
    }
}
