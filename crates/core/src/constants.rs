use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision carried by the compounding history value
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of asset rows generated when nothing else is configured
pub const DEFAULT_ASSET_COUNT: usize = 5;

/// Length of the history window in days when nothing else is configured
pub const DEFAULT_HISTORY_DAYS: usize = 30;

/// Longest history window a session accepts, in days
pub const MAX_HISTORY_DAYS: usize = 3650;

/// Portfolio value the history series compounds from
pub const INITIAL_PORTFOLIO_VALUE: Decimal = dec!(100000);

/// Qualitative palette used to color assets in charts, indexed by position
pub const ASSET_PALETTE: [&str; 5] = ["#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3"];

/// Line color for the historical value chart
pub const HISTORY_LINE_COLOR: &str = "#2E86C1";

/// Dashboard page title
pub const DASHBOARD_TITLE: &str = "Portfolio Asset Management Dashboard";

/// Footer note shown under every rendered page
pub const DEMO_DATA_NOTICE: &str =
    "This is a demo dashboard with randomly generated data. Use 'refresh' to generate new random data.";
