//! Static metric registry: dashboard descriptors, report module content,
//! and analytics narratives.
//!
//! Populated once at startup and read-only afterwards. Lookups for unknown
//! ids in narrative contexts fall back to a generic "Performance Analytics"
//! block rather than failing; report-module lookups return None so the
//! assembler can drop the module silently.

use crate::{ChartPoint, Kpi, KpiStatus, MetricDescriptor, ReportModuleContent, TableRow, Theme};
use serde::{Deserialize, Serialize};

/// Synthetic pseudo-module id with its own registered content
pub const EXECUTIVE_SUMMARY_ID: &str = "executive-summary";

/// The twelve trackable HR metrics, in dashboard display order
pub const DASHBOARD_ITEMS: [MetricDescriptor; 12] = [
    // Row 1 - Compensation
    MetricDescriptor { id: "paid-hours", title: "Paid hours", theme: Theme::Orange, icon: "credit-card" },
    MetricDescriptor { id: "worked-hours", title: "Worked hours", theme: Theme::Orange, icon: "hard-hat" },
    MetricDescriptor { id: "overtime", title: "Overtime", theme: Theme::Orange, icon: "clock" },
    MetricDescriptor { id: "sick-hours", title: "Sick hours/days", theme: Theme::Orange, icon: "bed-double" },
    // Row 2 - Workforce
    MetricDescriptor { id: "workforce", title: "Workforce", theme: Theme::Green, icon: "stethoscope" },
    MetricDescriptor { id: "terminations", title: "Terminations", theme: Theme::Green, icon: "user-minus" },
    MetricDescriptor { id: "retirements", title: "Retirements", theme: Theme::Green, icon: "sprout" },
    MetricDescriptor { id: "internal-transfers", title: "Internal Transfers", theme: Theme::Green, icon: "map-pin" },
    // Row 3 - Talent
    MetricDescriptor { id: "vacancy", title: "Vacancy", theme: Theme::Purple, icon: "binoculars" },
    MetricDescriptor { id: "retirement-risk", title: "Retirement Risk", theme: Theme::Purple, icon: "tree-deciduous" },
    MetricDescriptor { id: "new-hires", title: "New Hires", theme: Theme::Purple, icon: "user-check" },
    MetricDescriptor { id: "recruitment", title: "Recruitment", theme: Theme::Purple, icon: "users" },
];

/// Look up a dashboard tile descriptor by metric id
pub fn find_metric(id: &str) -> Option<&'static MetricDescriptor> {
    DASHBOARD_ITEMS.iter().find(|m| m.id == id)
}

/// Display title for a module id: tile title, "Executive Summary" for the
/// synthetic module, or the raw id as a last resort
pub fn module_title(id: &str) -> String {
    if let Some(m) = find_metric(id) {
        m.title.to_string()
    } else if id == EXECUTIVE_SUMMARY_ID {
        "Executive Summary".to_string()
    } else {
        id.to_string()
    }
}

/// All selectable module ids: executive summary first, then tiles in order
pub fn all_module_ids() -> Vec<&'static str> {
    let mut ids = vec![EXECUTIVE_SUMMARY_ID];
    ids.extend(DASHBOARD_ITEMS.iter().map(|m| m.id));
    ids
}

fn kpi(label: &str, value: &str, change: &str, status: KpiStatus) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        status,
    }
}

fn pt(label: &str, value: f64) -> ChartPoint {
    ChartPoint {
        label: label.to_string(),
        value,
        target: None,
    }
}

fn ptt(label: &str, value: f64, target: f64) -> ChartPoint {
    ChartPoint {
        label: label.to_string(),
        value,
        target: Some(target),
    }
}

fn row(label: &str, current: &str, previous: &str, change: &str) -> TableRow {
    TableRow {
        label: label.to_string(),
        current: current.to_string(),
        previous: previous.to_string(),
        change: change.to_string(),
    }
}

/// Registered report content for a module id, or None for modules with no
/// content (the assembler drops those silently)
pub fn module_content(id: &str) -> Option<ReportModuleContent> {
    use KpiStatus::{Critical, Good, Warning};

    let content = match id {
        "executive-summary" => ReportModuleContent {
            summary: "Workforce stability metrics indicate a critical variance in overtime usage \
                      across the North Zone, driven primarily by vacancies in acute care. However, \
                      retention initiatives in the South Zone have yielded a 4% improvement in \
                      quarterly attrition rates."
                .to_string(),
            key_factors: vec![
                "Risk: Sick leave utilization is tracking 12% above forecast for Q2.".to_string(),
                "Opportunity: New hire velocity has increased by 15% following process optimization."
                    .to_string(),
            ],
            recommendation: "Immediate intervention required for North Zone staffing levels."
                .to_string(),
            kpis: Some(vec![
                kpi("Total Headcount", "112,500", "+2.1%", Good),
                kpi("Overtime Rate", "12.4%", "+3.2%", Critical),
                kpi("Retention Rate", "91%", "+2%", Good),
                kpi("Time-to-Fill", "42 days", "-13 days", Good),
            ]),
            chart_series: Some(vec![
                ptt("North", 85.0, 95.0),
                ptt("South", 94.0, 95.0),
                ptt("East", 92.0, 95.0),
                ptt("West", 88.0, 95.0),
                ptt("Central", 90.0, 95.0),
            ]),
            table_rows: None,
        },
        "paid-hours" => ReportModuleContent {
            summary: "Total paid hours have increased by 3.2% YTD, largely driven by a surge in \
                      overtime hours in clinical departments. Regular hours remain within 1% of \
                      budget variance."
                .to_string(),
            key_factors: vec![
                "Overtime Usage: Up 15% vs previous quarter.".to_string(),
                "Regular Hours: Stable with minor seasonal fluctuations.".to_string(),
            ],
            recommendation: "Review scheduling efficiency in clinical wards to reduce overtime \
                             dependency."
                .to_string(),
            kpis: Some(vec![
                kpi("Total Paid Hours", "5.6M", "+3.2%", Warning),
                kpi("Regular Hours", "4.9M", "+0.8%", Good),
                kpi("Overtime Hours", "740K", "+15%", Critical),
            ]),
            chart_series: Some(vec![
                pt("Jan", 450.0),
                pt("Feb", 435.0),
                pt("Mar", 485.0),
                pt("Apr", 520.0),
                pt("May", 555.0),
                pt("Jun", 590.0),
            ]),
            table_rows: Some(vec![
                row("Clinical", "2.8M hrs", "2.5M hrs", "+12%"),
                row("Admin", "1.1M hrs", "1.0M hrs", "+10%"),
                row("Support", "0.9M hrs", "0.85M hrs", "+5.9%"),
                row("Research", "0.8M hrs", "0.75M hrs", "+6.7%"),
            ]),
        },
        "overtime" => ReportModuleContent {
            summary: "Overtime costs have exceeded the quarterly budget by $1.2M. The primary \
                      driver is vacancy backfill in specialized nursing units."
                .to_string(),
            key_factors: vec![
                "Critical Care Units: 40% of total overtime spend.".to_string(),
                "Emergency Dept: 25% increase due to flu season surge.".to_string(),
            ],
            recommendation: "Accelerate recruitment for specialized nursing roles to mitigate \
                             overtime costs."
                .to_string(),
            kpis: Some(vec![
                kpi("OT Cost YTD", "$11.2M", "+$2.8M", Critical),
                kpi("OT % of Payroll", "8.2%", "+1.5%", Warning),
                kpi("Avg OT/Employee", "6.4 hrs", "+1.2 hrs", Warning),
            ]),
            chart_series: Some(vec![
                ptt("Critical Care", 4450.0, 2800.0),
                ptt("Emergency", 2780.0, 1850.0),
                ptt("Surgery", 1850.0, 1400.0),
                ptt("General", 1110.0, 1160.0),
                ptt("Admin", 465.0, 700.0),
            ]),
            table_rows: Some(vec![
                row("North Zone", "$4.2M", "$2.8M", "+50%"),
                row("South Zone", "$2.8M", "$2.5M", "+12%"),
                row("East Zone", "$2.3M", "$2.1M", "+9.5%"),
                row("West Zone", "$1.9M", "$1.6M", "+18.8%"),
            ]),
        },
        "sick-hours" => ReportModuleContent {
            summary: "Sick leave utilization has spiked to 5.8%, surpassing the 4% target. This \
                      trend is correlated with recent viral outbreaks and reported burnout in \
                      high-stress units."
                .to_string(),
            key_factors: vec![
                "Short-term Disability: 10% increase in stress-related claims.".to_string(),
                "Viral Impact: 30% of absence attributed to seasonal illness.".to_string(),
            ],
            recommendation: "Implement wellness rounds and review float pool capacity.".to_string(),
            kpis: Some(vec![
                kpi("Sick Rate", "5.8%", "+1.8%", Critical),
                kpi("Avg Days Lost", "4.2", "+0.8", Warning),
                kpi("Cost Impact", "$2.1M", "+$490K", Critical),
            ]),
            chart_series: Some(vec![
                ptt("Jan", 4.2, 4.0),
                ptt("Feb", 4.5, 4.0),
                ptt("Mar", 5.1, 4.0),
                ptt("Apr", 5.4, 4.0),
                ptt("May", 5.6, 4.0),
                ptt("Jun", 5.8, 4.0),
            ]),
            table_rows: None,
        },
        "workforce" => ReportModuleContent {
            summary: "Total headcount has reached 112,500, with a net growth of 2.1% this quarter. \
                      As one of the largest healthcare employers in the region, turnover remains \
                      manageable but detailed attention is needed in rural sectors."
                .to_string(),
            key_factors: vec![
                "Retention: 92% retention rate in urban centers.".to_string(),
                "Rural Gap: 85% retention, highlighting regional disparities.".to_string(),
            ],
            recommendation: "Expand rural retention bonus program and partner with local colleges."
                .to_string(),
            kpis: Some(vec![
                kpi("Headcount", "112,500", "+2.1%", Good),
                kpi("Turnover", "8.2%", "-0.5%", Good),
                kpi("New Hires", "2,870", "+18%", Good),
            ]),
            chart_series: Some(vec![
                pt("Nursing", 42800.0),
                pt("Clinical", 27800.0),
                pt("Admin", 19700.0),
                pt("Support", 14400.0),
                pt("Exec/Mgmt", 7800.0),
            ]),
            table_rows: Some(vec![
                row("Urban Centers", "89,900", "88,100", "+2.0%"),
                row("Rural Areas", "22,600", "22,000", "+2.7%"),
            ]),
        },
        "recruitment" => ReportModuleContent {
            summary: "Time-to-fill for clinical roles has improved to 42 days (down from 55), \
                      thanks to the new streamlined credentialing process."
                .to_string(),
            key_factors: vec![
                "Pipeline: 200+ active candidates in final interview stage.".to_string(),
                "Bottlenecks: Background checks remain the slowest step.".to_string(),
            ],
            recommendation: "Partner with external vendor to expedite background checks."
                .to_string(),
            kpis: Some(vec![
                kpi("Time-to-Fill", "42 days", "-13 days", Good),
                kpi("Open Positions", "568", "-74", Good),
                kpi("Offer Accept Rate", "87%", "+5%", Good),
            ]),
            chart_series: Some(vec![
                pt("Q1", 55.0),
                pt("Q2", 52.0),
                pt("Q3", 48.0),
                pt("Q4", 42.0),
            ]),
            table_rows: Some(vec![
                row("Nursing", "38 days", "52 days", "-27%"),
                row("Clinical", "45 days", "58 days", "-22%"),
                row("Admin", "28 days", "35 days", "-20%"),
            ]),
        },
        _ => return None,
    };
    Some(content)
}

/// Severity tag on an analytics insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for InsightSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightSeverity::Critical => write!(f, "CRITICAL"),
            InsightSeverity::Warning => write!(f, "WARNING"),
            InsightSeverity::Info => write!(f, "INFO"),
        }
    }
}

/// Headline figure on the advanced-analytics view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeKpi {
    pub label: String,
    pub value: String,
    pub trend: String,
    /// True when the trend direction is unfavourable
    pub negative: bool,
}

/// A highlighted observation with a recommended action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub severity: InsightSeverity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

/// Scored contributor on the risk radar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub factor: String,
    pub score: u8,
}

/// One row of the written report's action plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub priority: String,
    pub action: String,
    pub impact: String,
    pub owner: String,
}

/// The long-form "written report" attached to an analytics narrative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenReport {
    pub executive_summary: String,
    pub key_findings: Vec<String>,
    pub analysis: String,
    pub recommendations: Vec<ActionItem>,
    pub conclusion: String,
}

/// Full analytics narrative for the advanced-analytics view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsNarrative {
    pub title: String,
    pub kpis: Vec<NarrativeKpi>,
    pub insights: Vec<Insight>,
    pub risk_factors: Vec<RiskFactor>,
    pub written: WrittenReport,
}

fn nkpi(label: &str, value: &str, trend: &str, negative: bool) -> NarrativeKpi {
    NarrativeKpi {
        label: label.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
        negative,
    }
}

fn insight(severity: InsightSeverity, title: &str, desc: &str, rec: &str) -> Insight {
    Insight {
        severity,
        title: title.to_string(),
        description: desc.to_string(),
        recommendation: rec.to_string(),
    }
}

fn risk(factor: &str, score: u8) -> RiskFactor {
    RiskFactor {
        factor: factor.to_string(),
        score,
    }
}

fn action(priority: &str, action: &str, impact: &str, owner: &str) -> ActionItem {
    ActionItem {
        priority: priority.to_string(),
        action: action.to_string(),
        impact: impact.to_string(),
        owner: owner.to_string(),
    }
}

/// Analytics narrative for a metric id. Unknown ids receive the generic
/// "Performance Analytics" block; this never fails or returns empty content.
pub fn analytics_narrative(id: &str) -> AnalyticsNarrative {
    use InsightSeverity::{Critical, Info, Warning};

    match id {
        "overtime" => AnalyticsNarrative {
            title: "Overtime Analytics".to_string(),
            kpis: vec![
                nkpi("Total OT Cost", "$12.4M", "+8.2%", true),
                nkpi("Avg OT/Employee", "6.2 hrs/wk", "-2.1%", false),
                nkpi("High-Risk Units", "14", "+3", true),
                nkpi("Budget Variance", "-$1.8M", "Over Budget", true),
            ],
            insights: vec![
                insight(
                    Critical,
                    "Burnout Risk Alert",
                    "Emergency Dept has 23% of staff exceeding 60hr/week for 4+ consecutive weeks.",
                    "Implement mandatory rest periods.",
                ),
                insight(
                    Warning,
                    "Cost Acceleration",
                    "OT spend increased 15% YoY while productivity metrics remain flat.",
                    "Review scheduling algorithms.",
                ),
            ],
            risk_factors: vec![
                risk("Staffing Gaps", 85),
                risk("Seasonal Demand", 72),
                risk("Scheduling Issues", 68),
                risk("Training Gaps", 45),
            ],
            written: WrittenReport {
                executive_summary: "Overtime expenditure for FY 2026 has reached $12.4M, \
                    representing an 8.2% increase over the previous fiscal year. This trend \
                    significantly exceeds budgeted projections by $1.8M and warrants immediate \
                    executive attention. The primary drivers include persistent staffing gaps in \
                    critical care units and inefficient scheduling practices that have not \
                    adapted to seasonal demand patterns."
                    .to_string(),
                key_findings: vec![
                    "Emergency Department staff averaging 6.2 overtime hours per week, 48% above \
                     industry benchmark"
                        .to_string(),
                    "23% of clinical staff in high-acuity areas exceeding safe weekly hour \
                     thresholds"
                        .to_string(),
                    "Strong correlation (r=0.72) identified between overtime rates and subsequent \
                     sick leave usage"
                        .to_string(),
                    "14 units classified as high-risk for burnout based on consecutive overtime \
                     patterns"
                        .to_string(),
                ],
                analysis: "The overtime crisis is fundamentally a capacity planning issue \
                    compounded by reactive scheduling practices. Root cause analysis reveals that \
                    68% of overtime hours are driven by last-minute shift coverage needs, \
                    indicating systemic gaps in float pool utilization and predictive staffing \
                    models. Financial modeling indicates that converting 15% of current overtime \
                    hours to permanent FTE positions would yield net savings of $2.1M annually \
                    while improving staff wellbeing metrics."
                    .to_string(),
                recommendations: vec![
                    action("Immediate", "Implement mandatory rest periods for staff exceeding 50 hours weekly", "High", "Unit Managers"),
                    action("Short-term", "Expand float pool capacity by 25% in high-overtime zones", "High", "HR Operations"),
                    action("Medium-term", "Deploy predictive scheduling algorithm to anticipate coverage needs", "Medium", "Workforce Planning"),
                    action("Long-term", "Conduct FTE conversion analysis for chronic overtime positions", "High", "Finance & HR"),
                ],
                conclusion: "Without intervention, current overtime trends project a $15.2M annual \
                    cost and significant patient safety risks due to staff fatigue. The \
                    recommended actions, if implemented within 90 days, are projected to reduce \
                    overtime expenditure by 22% and improve staff satisfaction scores by 15 \
                    points."
                    .to_string(),
            },
        },
        "terminations" => AnalyticsNarrative {
            title: "Turnover Analytics".to_string(),
            kpis: vec![
                nkpi("Annualized Rate", "12.4%", "+1.2%", true),
                nkpi("Cost of Turnover", "$28.6M", "+$4.2M", true),
                nkpi("Avg Tenure at Exit", "3.8 yrs", "-0.6 yrs", true),
                nkpi("Regrettable Exits", "42%", "+8%", true),
            ],
            insights: vec![
                insight(
                    Critical,
                    "High Performer Flight Risk",
                    "Voluntary exits among top-rated nurses up 34% this quarter.",
                    "Urgent compensation review for critical roles.",
                ),
                insight(
                    Warning,
                    "First-Year Attrition Spike",
                    "28% of new hires leaving within 12 months, up from 19% baseline.",
                    "Revamp onboarding program.",
                ),
            ],
            risk_factors: vec![
                risk("Compensation Gap", 82),
                risk("Work-Life Balance", 76),
                risk("Career Growth", 64),
                risk("Management Quality", 58),
            ],
            written: WrittenReport {
                executive_summary: "Employee turnover has accelerated to 12.4% annualized rate, \
                    with associated costs reaching $28.6M, a $4.2M increase from prior year. Most \
                    concerning is the 42% regrettable-exit rate, indicating the loss of \
                    high-performing talent at an unsustainable pace. Exit interview analysis \
                    reveals compensation competitiveness and work-life balance as primary \
                    drivers, with first-year employees representing a disproportionate share of \
                    departures."
                    .to_string(),
                key_findings: vec![
                    "Voluntary turnover among top-quartile performers increased 34% \
                     quarter-over-quarter"
                        .to_string(),
                    "Average tenure at exit declined to 3.8 years, down 0.6 years from prior \
                     period"
                        .to_string(),
                    "First-year attrition rate of 28% significantly exceeds 19% organizational \
                     baseline"
                        .to_string(),
                    "Cost per turnover event averages $22,400, including recruitment, training, \
                     and productivity loss"
                        .to_string(),
                ],
                analysis: "The turnover crisis reflects a confluence of market and organizational \
                    factors. Competitive analysis shows a 12-15% compensation gap for specialized \
                    nursing roles compared to regional competitors. The elevated first-year \
                    attrition points to onboarding deficiencies; satisfaction surveys show \
                    correlation (r=0.78) between onboarding experience and 12-month retention."
                    .to_string(),
                recommendations: vec![
                    action("Immediate", "Conduct market compensation analysis for top 10 critical roles", "High", "Total Rewards"),
                    action("Immediate", "Launch retention bonus program for high-performers in shortage areas", "High", "HR Business Partners"),
                    action("Short-term", "Pilot flexible scheduling program in 3 high-turnover units", "Medium", "Operations"),
                    action("Medium-term", "Redesign onboarding with 90-day mentorship component", "High", "Talent Development"),
                ],
                conclusion: "Turnover trends, if unaddressed, project $32M annual costs and \
                    critical staffing shortages in specialty areas within 18 months. Priority \
                    investment in compensation competitiveness and flexible work arrangements can \
                    reduce voluntary turnover by an estimated 25%, yielding $7M+ in annual \
                    savings."
                    .to_string(),
            },
        },
        "vacancy" => AnalyticsNarrative {
            title: "Vacancy Analytics".to_string(),
            kpis: vec![
                nkpi("Critical Vacancies", "847", "+12%", true),
                nkpi("Avg Time to Fill", "42 days", "+8 days", true),
                nkpi("Cost of Vacancy", "$4.2M/mo", "+$0.8M", true),
                nkpi("Offer Accept Rate", "78%", "-4%", true),
            ],
            insights: vec![
                insight(
                    Critical,
                    "ICU Staffing Crisis",
                    "Critical care nursing vacancies at 18.5%, impacting bed availability.",
                    "Expedite international recruitment.",
                ),
                insight(
                    Warning,
                    "Pipeline Deterioration",
                    "Qualified applicant pool decreased 22% YoY.",
                    "Enhance employer branding.",
                ),
            ],
            risk_factors: vec![
                risk("Salary Competition", 88),
                risk("Location Appeal", 65),
                risk("Employer Brand", 58),
                risk("Process Speed", 72),
            ],
            written: WrittenReport {
                executive_summary: "The organization currently carries 6,950 open positions with \
                    847 classified as critical vacancies impacting patient care delivery. Average \
                    time-to-fill has extended to 42 days (+8 days YoY), contributing to monthly \
                    vacancy costs of $4.2M. The declining offer acceptance rate (78%, down 4%) \
                    signals competitive positioning challenges requiring immediate strategic \
                    response."
                    .to_string(),
                key_findings: vec![
                    "ICU and Emergency nursing vacancies at 18.5%, resulting in 24 closed beds \
                     organization-wide"
                        .to_string(),
                    "Qualified applicant pool contracted 22% compared to prior year".to_string(),
                    "Offer-to-acceptance conversion declined from 82% to 78% indicating candidate \
                     counter-offers"
                        .to_string(),
                    "Time-to-fill for specialized roles averages 67 days, creating extended \
                     coverage gaps"
                        .to_string(),
                ],
                analysis: "Vacancy challenges stem from a tightening labor market combined with \
                    internal process inefficiencies. Analysis of declined offers reveals salary \
                    as primary factor (68%), followed by schedule concerns (22%). Process mapping \
                    identified 12 unnecessary days in the screening-to-offer workflow. Overtime \
                    costs in understaffed units exceed $2.1M monthly."
                    .to_string(),
                recommendations: vec![
                    action("Immediate", "Approve emergency salary adjustment for ICU/ED nursing roles", "Critical", "Executive Leadership"),
                    action("Immediate", "Streamline hiring process to reduce time-to-offer by 40%", "High", "Talent Acquisition"),
                    action("Short-term", "Launch international recruitment program for critical care nurses", "High", "Global Talent"),
                    action("Medium-term", "Invest $500K in employer branding campaign targeting key talent pools", "Medium", "Marketing & HR"),
                ],
                conclusion: "Current vacancy levels represent a patient safety risk and \
                    significant financial burden. Immediate action on compensation \
                    competitiveness and process efficiency can reduce critical vacancies by 35% \
                    within 6 months, recovering approximately $1.5M monthly in avoided overtime \
                    and agency costs."
                    .to_string(),
            },
        },
        "sick-hours" => AnalyticsNarrative {
            title: "Absence Analytics".to_string(),
            kpis: vec![
                nkpi("Absence Rate", "4.8%", "+0.6%", true),
                nkpi("Annual Cost", "$18.2M", "+$2.4M", true),
                nkpi("Avg Days/Employee", "8.4", "+1.2", true),
                nkpi("LTD Cases", "142", "+18", true),
            ],
            insights: vec![
                insight(
                    Critical,
                    "Mental Health Trend",
                    "Stress-related absences up 28% YoY, correlated with overtime.",
                    "Expand EAP access.",
                ),
                insight(
                    Warning,
                    "Seasonal Pattern",
                    "Predictive model shows 35% spike expected in Feb-Mar.",
                    "Pre-position float resources.",
                ),
            ],
            risk_factors: vec![
                risk("Workload Stress", 82),
                risk("Seasonal Illness", 75),
                risk("Chronic Conditions", 62),
                risk("Workplace Safety", 48),
            ],
            written: WrittenReport {
                executive_summary: "Organizational absence rate has climbed to 4.8%, representing \
                    a 0.6% increase from baseline and driving $18.2M in annual direct and \
                    indirect costs. The 28% year-over-year increase in stress-related absences is \
                    particularly concerning, showing strong correlation with units experiencing \
                    elevated overtime."
                    .to_string(),
                key_findings: vec![
                    "Average sick days per employee increased to 8.4, exceeding industry \
                     benchmark of 6.2"
                        .to_string(),
                    "Mental health-related absence codes increased 28% YoY, concentrated in \
                     high-acuity units"
                        .to_string(),
                    "142 active long-term disability cases, up 15% from prior year".to_string(),
                    "Seasonal analysis predicts 35% absence spike in February-March period"
                        .to_string(),
                ],
                analysis: "Absence patterns reveal a systemic wellbeing issue linked to workload \
                    and work environment factors. Units with overtime rates exceeding 10% show \
                    45% higher absence rates, suggesting a burnout-driven cycle. Cost modeling \
                    shows each 0.1% increase in absence rate translates to approximately $380K \
                    in direct costs and $620K in productivity impact."
                    .to_string(),
                recommendations: vec![
                    action("Immediate", "Deploy enhanced EAP outreach in high-absence units", "Medium", "Employee Health"),
                    action("Immediate", "Pre-position float pool resources for predicted February spike", "High", "Workforce Planning"),
                    action("Short-term", "Implement early intervention program for musculoskeletal issues", "High", "Occupational Health"),
                    action("Medium-term", "Develop comprehensive wellness program targeting stress reduction", "High", "HR & Benefits"),
                ],
                conclusion: "Absence trends indicate a workforce health problem requiring \
                    multi-faceted intervention. Investment in proactive wellness programming and \
                    workload management can achieve a projected 15% reduction in absence rates, \
                    yielding $2.7M annual savings and improved patient care continuity."
                    .to_string(),
            },
        },
        _ => AnalyticsNarrative {
            title: "Performance Analytics".to_string(),
            kpis: vec![
                nkpi("YTD Performance", "94.2%", "+2.1%", false),
                nkpi("Budget Variance", "-3.4%", "On Track", false),
                nkpi("Efficiency Index", "87.5", "+4.2", false),
                nkpi("Quality Score", "4.2/5", "+0.3", false),
            ],
            insights: vec![
                insight(
                    Info,
                    "Performance Summary",
                    "Metrics are tracking within acceptable ranges.",
                    "Continue monitoring.",
                ),
                insight(
                    Info,
                    "Optimization Opportunity",
                    "Analysis indicates efficiency gains possible.",
                    "Review processes.",
                ),
            ],
            risk_factors: vec![
                risk("Resource Availability", 72),
                risk("Process Efficiency", 68),
                risk("Quality Control", 85),
                risk("Training Levels", 78),
            ],
            written: WrittenReport {
                executive_summary: "Current performance metrics indicate the organization is \
                    operating within acceptable parameters with a 94.2% YTD performance score. \
                    Budget variance of -3.4% remains within tolerance, and quality indicators \
                    show positive trajectory. This report provides detailed analysis of current \
                    state and opportunities for continued improvement."
                    .to_string(),
                key_findings: vec![
                    "Overall performance tracking 2.1% above prior year baseline".to_string(),
                    "Efficiency index improved by 4.2 points through process optimization \
                     initiatives"
                        .to_string(),
                    "Quality scores reached 4.2/5, driven by enhanced training programs"
                        .to_string(),
                    "Budget adherence within acceptable variance range of ±5%".to_string(),
                ],
                analysis: "Performance trends reflect successful execution of operational \
                    improvement initiatives implemented in prior quarters. The efficiency gains \
                    are attributable to workflow optimization and technology investments. \
                    Quality improvements correlate with expanded training coverage and enhanced \
                    supervision protocols."
                    .to_string(),
                recommendations: vec![
                    action("Ongoing", "Continue monitoring key performance indicators weekly", "Medium", "Operations"),
                    action("Short-term", "Expand successful efficiency practices to additional units", "Medium", "Process Improvement"),
                    action("Medium-term", "Invest in automation for high-volume routine processes", "High", "IT & Operations"),
                ],
                conclusion: "The organization is well-positioned for continued performance \
                    improvement. Sustained attention to efficiency and quality initiatives will \
                    support long-term operational excellence and stakeholder satisfaction."
                    .to_string(),
            },
        },
    }
}

/// An operational alert surfaced on the overview briefing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationalAlert {
    pub id: String,
    pub title: String,
    pub value: String,
    pub status: KpiStatus,
    pub subtitle: String,
}

/// Morning-briefing alerts shown on the overview tab
pub fn operational_alerts() -> Vec<OperationalAlert> {
    let alert = |id: &str, title: &str, value: &str, status: KpiStatus, subtitle: &str| {
        OperationalAlert {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            status,
            subtitle: subtitle.to_string(),
        }
    };
    vec![
        alert("overtime-surge", "Overtime Surge", "+12.4%", KpiStatus::Critical, "North Zone • Emergency"),
        alert("sick-leave", "Sick Leave Spike", "+8.5%", KpiStatus::Warning, "All Zones • Viral"),
        alert("nursing-vacancy", "Nursing Vacancy", "142 FTE", KpiStatus::Warning, "Rural • Recruitment"),
        alert("key-attrition", "Key Attrition", "High", KpiStatus::Good, "Clinical Ops Leadership"),
    ]
}
