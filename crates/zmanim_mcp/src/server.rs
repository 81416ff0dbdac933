use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::core::{
    error::{McpResult, ZmanimServerError},
    models::{ShabbatTimesRequest, ZmanimRequest},
    provider::ZmanimProvider,
    validation::Validate,
};

/// Zmanim MCP Server: Jewish prayer times per location and date
#[derive(Clone)]
pub struct ZmanimService {
    provider: ZmanimProvider,
    tool_router: ToolRouter<ZmanimService>,
    prompt_router: PromptRouter<ZmanimService>,
}

impl ZmanimService {
    pub fn new() -> Self {
        Self {
            provider: ZmanimProvider::new(),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn generate_status_content(&self) -> &'static str {
        r#"Zmanim MCP Server Status

Server: Running
Tools Available: 6
Prompts Available: 1
Resources Available: 3

Capabilities:
- Sunrise and sunset for any location and date
- Latest Shema and Tefila deadlines (GR"A and MG"A opinions)
- Mincha times (Chatzos, Mincha Gedola, Mincha Ketana, Plag HaMincha)
- Shabbat candle lighting and Havdalah with a configurable offset
- Complete daily zmanim digest
- Markdown or JSON output per request"#
    }

    fn generate_help_content(&self) -> &'static str {
        r#"Zmanim MCP Server Help

TOOLS (all take location, latitude, longitude, time_zone, optional date,
optional response_format):

- get_sunrise_sunset: Sunrise and sunset times
- get_shema_times: Latest Shema per the GR"A and MG"A
- get_tefila_times: Latest morning prayer per the GR"A and MG"A
- get_mincha_times: Chatzos, Mincha Gedola, Mincha Ketana, Plag HaMincha
- get_shabbat_times: Candle lighting, sunset and Havdalah
  (extra parameter: candle_lighting_offset, 1-60 minutes, default 18)
- get_daily_times: The full daily digest of zmanim

PROMPTS:
- zmanim_guidance: Best practices for querying zmanim

RESOURCES:
- zmanim://status: Current server status
- zmanim://help: This help documentation
- zmanim://glossary: Glossary of zmanim terminology

EXAMPLE USAGE:

Get sunrise and sunset:
```json
{
  "location": "New York, NY",
  "latitude": 40.7128,
  "longitude": -74.0060,
  "time_zone": "America/New_York",
  "date": "2024-06-21"
}
```

Get Shabbat times with a 40 minute candle lighting offset:
```json
{
  "location": "Jerusalem",
  "latitude": 31.7683,
  "longitude": 35.2137,
  "time_zone": "Asia/Jerusalem",
  "candle_lighting_offset": 40,
  "response_format": "json"
}
```

PARAMETER FORMAT:
- Coordinates are decimal degrees (latitude -90 to 90, longitude -180 to 180)
- Timezones are full IANA names: 'America/New_York', 'Asia/Jerusalem'
- Dates are YYYY-MM-DD; omit the date for today in the requested timezone
- response_format is 'markdown' (default) or 'json'

ABSENT TIMES:
- At extreme latitudes the sun may not rise or set on a given date.
  Affected times render as 'N/A' (markdown) or null (JSON); this is not
  an error."#
    }

    fn generate_glossary_content(&self) -> &'static str {
        r#"Zmanim Glossary

- Zman (pl. zmanim): a halachically defined time boundary for a ritual
  obligation (e.g. the latest time to recite a prayer).
- Alos HaShachar: dawn, here 72 minutes before sunrise.
- Sof Zman Shema: the deadline for reciting the morning Shema.
- Sof Zman Tefila: the deadline for the morning Shemoneh Esrei.
- Chatzos: solar midday, the midpoint of sunrise and sunset.
- Mincha Gedola: the earliest time for the afternoon prayer.
- Mincha Ketana: the preferred earliest time for the afternoon prayer.
- Plag HaMincha: 10.75 temporal hours into the day; the latest time for
  Mincha according to some opinions.
- Tzeis HaKochavim: nightfall, here 72 minutes after sunset.
- Temporal hour: one-twelfth of the daylight (or dawn-to-nightfall)
  period, used to scale deadlines rather than fixed clock hours.
- GR"A (Vilna Gaon): counts temporal hours from sunrise to sunset.
- MG"A (Magen Avraham): counts temporal hours from dawn to nightfall,
  yielding earlier (stricter) morning deadlines."#
    }
}

impl Default for ZmanimService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ZmanimService {
    #[tool(description = "Get sunrise and sunset times for a specified location and date")]
    pub(crate) async fn get_sunrise_sunset(
        &self,
        Parameters(req): Parameters<ZmanimRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.sunrise_sunset(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }

    #[tool(
        description = "Get the latest times for reciting the morning Shema according to the GR\"A and MG\"A opinions"
    )]
    pub(crate) async fn get_shema_times(
        &self,
        Parameters(req): Parameters<ZmanimRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.shema_times(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }

    #[tool(
        description = "Get the latest times for morning prayer (Tefila/Shacharis) according to the GR\"A and MG\"A opinions"
    )]
    pub(crate) async fn get_tefila_times(
        &self,
        Parameters(req): Parameters<ZmanimRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.tefila_times(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }

    #[tool(
        description = "Get the times for Mincha (afternoon prayer): Chatzos, Mincha Gedola, Mincha Ketana and Plag HaMincha"
    )]
    pub(crate) async fn get_mincha_times(
        &self,
        Parameters(req): Parameters<ZmanimRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.mincha_times(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }

    #[tool(
        description = "Get Shabbat candle lighting and Havdalah times for a specified location and date"
    )]
    pub(crate) async fn get_shabbat_times(
        &self,
        Parameters(req): Parameters<ShabbatTimesRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.shabbat_times(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }

    #[tool(
        description = "Get a comprehensive set of daily zmanim (Jewish prayer times) for a location"
    )]
    pub(crate) async fn get_daily_times(
        &self,
        Parameters(req): Parameters<ZmanimRequest>,
    ) -> McpResult<CallToolResult> {
        req.validate()?;
        let report = self.provider.daily_times(&req)?;
        Ok(CallToolResult::success(vec![Content::text(
            report.render(req.response_format),
        )]))
    }
}

#[prompt_router]
impl ZmanimService {
    /// Generate guidance for effective zmanim queries
    #[prompt(name = "zmanim_guidance")]
    async fn zmanim_guidance(
        &self,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<Vec<PromptMessage>> {
        let guidance = r#"Zmanim Query Best Practices:

1. **Location Parameters**
   - Provide the location name together with its decimal coordinates
   - Latitude runs -90 to 90, longitude -180 to 180
   - Use full IANA timezone names (e.g., 'America/New_York', 'Asia/Jerusalem')

2. **Dates**
   - Use YYYY-MM-DD format (e.g., '2024-06-21')
   - Omit the date to get times for today in the requested timezone

3. **Halachic Opinions**
   - GR"A (Vilna Gaon): temporal hours counted from sunrise to sunset
   - MG"A (Magen Avraham): temporal hours counted from dawn to nightfall
   - The MG"A morning deadlines are earlier and more stringent

4. **Candle Lighting**
   - The offset before sunset is 18 minutes by default
   - Communities differ; Jerusalem uses 40 minutes
   - Valid offsets are 1 to 60 minutes

5. **Output**
   - 'markdown' (default) for human-readable schedules
   - 'json' for machine-readable timestamps with ISO 8601 fields
   - At extreme latitudes a time may not exist on a given date; it is
     reported as 'N/A' or null, not as an error"#;

        Ok(vec![PromptMessage {
            role: PromptMessageRole::Assistant,
            content: PromptMessageContent::text(guidance),
        }])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for ZmanimService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Zmanim MCP Server for Jewish prayer times. Tools: get_sunrise_sunset, \
                 get_shema_times, get_tefila_times, get_mincha_times, get_shabbat_times, \
                 get_daily_times. Provide a location name, decimal coordinates, an IANA \
                 timezone and an optional YYYY-MM-DD date."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("zmanim://status", "server-status"),
                self.create_resource_text("zmanim://help", "help-documentation"),
                self.create_resource_text("zmanim://glossary", "zmanim-glossary"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        match uri.as_str() {
            "zmanim://status" => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(self.generate_status_content(), uri)],
            }),
            "zmanim://help" => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(self.generate_help_content(), uri)],
            }),
            "zmanim://glossary" => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(
                    self.generate_glossary_content(),
                    uri,
                )],
            }),
            _ => Err(ZmanimServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into()),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Zmanim MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let service = ZmanimService::new().serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rmcp::ServerHandler;
    use rmcp::handler::server::wrapper::Parameters;
    use rmcp::model::ProtocolVersion;

    use crate::core::models::{ResponseFormat, ShabbatTimesRequest, ZmanimRequest};
    use crate::server::ZmanimService;

    fn new_york_request(format: ResponseFormat) -> ZmanimRequest {
        ZmanimRequest {
            location: "New York, NY".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            time_zone: "America/New_York".to_string(),
            date: Some("2024-06-21".to_string()),
            response_format: format,
        }
    }

    #[tokio::test]
    async fn test_get_sunrise_sunset() {
        let service = ZmanimService::new();

        let result = service
            .get_sunrise_sunset(Parameters(new_york_request(ResponseFormat::Markdown)))
            .await;
        assert!(result.is_ok());

        let call_result = result.unwrap();
        assert!(!call_result.content.is_empty());
    }

    #[tokio::test]
    async fn test_get_sunrise_sunset_json() {
        let service = ZmanimService::new();

        let result = service
            .get_sunrise_sunset(Parameters(new_york_request(ResponseFormat::Json)))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_latitude_is_rejected() {
        let service = ZmanimService::new();

        let mut req = new_york_request(ResponseFormat::Markdown);
        req.latitude = 91.0;

        let result = service.get_sunrise_sunset(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_timezone_is_rejected() {
        let service = ZmanimService::new();

        let mut req = new_york_request(ResponseFormat::Markdown);
        req.time_zone = "Invalid/Timezone".to_string();

        let result = service.get_sunrise_sunset(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_date_is_rejected() {
        let service = ZmanimService::new();

        let mut req = new_york_request(ResponseFormat::Markdown);
        req.date = Some("06/21/2024".to_string());

        let result = service.get_shema_times(Parameters(req)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_all_location_tools_succeed() {
        let service = ZmanimService::new();

        let req = new_york_request(ResponseFormat::Markdown);
        assert!(
            service
                .get_shema_times(Parameters(req.clone()))
                .await
                .is_ok()
        );
        assert!(
            service
                .get_tefila_times(Parameters(req.clone()))
                .await
                .is_ok()
        );
        assert!(
            service
                .get_mincha_times(Parameters(req.clone()))
                .await
                .is_ok()
        );
        assert!(service.get_daily_times(Parameters(req)).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_shabbat_times_offset_bounds() {
        let service = ZmanimService::new();

        let base = ShabbatTimesRequest {
            location: "New York, NY".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            time_zone: "America/New_York".to_string(),
            date: Some("2024-06-21".to_string()),
            response_format: ResponseFormat::Json,
            candle_lighting_offset: 18,
        };

        let result = service.get_shabbat_times(Parameters(base.clone())).await;
        assert!(result.is_ok());

        let mut too_low = base.clone();
        too_low.candle_lighting_offset = 0;
        assert!(
            service
                .get_shabbat_times(Parameters(too_low))
                .await
                .is_err()
        );

        let mut too_high = base;
        too_high.candle_lighting_offset = 61;
        assert!(
            service
                .get_shabbat_times(Parameters(too_high))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_polar_location_is_not_an_error() {
        let service = ZmanimService::new();

        let req = ZmanimRequest {
            location: "Longyearbyen".to_string(),
            latitude: 78.2232,
            longitude: 15.6267,
            time_zone: "Arctic/Longyearbyen".to_string(),
            date: Some("2024-06-21".to_string()),
            response_format: ResponseFormat::Markdown,
        };

        let result = service.get_daily_times(Parameters(req)).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_service_creation() {
        let service = ZmanimService::new();
        let info = service.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.instructions.is_some());
    }
}
