//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::NetworkError;
use crate::graph::{Connection, Facility, Relationship};
use crate::routing::{DistanceMatrix, NearestFacility, Route};
use crate::spanning_tree::SpanningTree;
use crate::traversal::Traversal;
use crate::utils::string::{format_distance, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<[Facility]> for HumanReportGenerator {
    fn generate_report(&self, facilities: &[Facility]) -> Result<String, NetworkError> {
        let mut output = String::new();

        if facilities.is_empty() {
            writeln!(output, "{} No facilities recorded", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} {}:\n",
            style("🏥").cyan(),
            style(facilities.len()).bold(),
            pluralize("facility", facilities.len())
        )?;

        for facility in facilities {
            writeln!(
                output,
                "  {} {} {} ({})",
                style("•").dim(),
                style(format!("[{}]", facility.id())).yellow(),
                style(facility.name()).bold(),
                facility.region()
            )?;
            writeln!(
                output,
                "      {:.4}, {:.4}  capacity {}",
                facility.latitude(),
                facility.longitude(),
                style(facility.capacity()).green()
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<[Connection]> for HumanReportGenerator {
    fn generate_report(&self, connections: &[Connection]) -> Result<String, NetworkError> {
        let mut output = String::new();

        if connections.is_empty() {
            writeln!(output, "{} No connections recorded", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} {} {}:\n",
            style("🔗").cyan(),
            style(connections.len()).bold(),
            pluralize("connection", connections.len())
        )?;

        for connection in connections {
            write!(
                output,
                "  {} {} → {}  {}, {} min",
                style("→").dim(),
                style(connection.origin()).yellow(),
                style(connection.destination()).yellow(),
                format_distance(connection.distance()),
                connection.travel_time()
            )?;
            if connection.description().is_empty() {
                writeln!(output)?;
            } else {
                writeln!(output, "  {}", style(connection.description()).dim())?;
            }
        }

        Ok(output)
    }
}

impl ReportGenerator<[Relationship]> for HumanReportGenerator {
    fn generate_report(&self, rows: &[Relationship]) -> Result<String, NetworkError> {
        let mut output = String::new();

        if rows.is_empty() {
            writeln!(output, "{} No facilities recorded", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(output, "{} Facility relationships:\n", style("📋").cyan())?;

        for row in rows {
            let source = format!("[{}] {}", row.facility_id, row.facility_name);
            match &row.link {
                Some(link) => writeln!(
                    output,
                    "  {} → {}  {}, {} min  {}",
                    style(source).bold(),
                    style(format!("[{}] {}", link.to, link.to_name)).yellow(),
                    format_distance(link.distance),
                    link.travel_time,
                    style(&link.description).dim()
                )?,
                None => writeln!(
                    output,
                    "  {} → {}",
                    style(source).bold(),
                    style("None").dim()
                )?,
            }
        }

        Ok(output)
    }
}

impl ReportGenerator<Route> for HumanReportGenerator {
    fn generate_report(&self, route: &Route) -> Result<String, NetworkError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} Shortest route from {} to {}: {}\n",
            style("🧭").cyan(),
            style(route.origin).bold(),
            style(route.destination).bold(),
            style(format_distance(route.total_distance)).green().bold()
        )?;

        for hop in &route.hops {
            writeln!(
                output,
                "  {} {} → {}  {}, {} min",
                style("→").dim(),
                style(&hop.from_name).yellow(),
                style(&hop.to_name).yellow(),
                format_distance(hop.distance),
                hop.travel_time
            )?;
        }

        let path: Vec<_> = route.path.iter().map(ToString::to_string).collect();
        writeln!(
            output,
            "\n  Path: {}  ({} {}, {} min)",
            path.join(" → "),
            route.hops.len(),
            pluralize("hop", route.hops.len()),
            route.total_travel_time()
        )?;

        Ok(output)
    }
}

impl ReportGenerator<Traversal> for HumanReportGenerator {
    fn generate_report(&self, traversal: &Traversal) -> Result<String, NetworkError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} Breadth-first walk from {} reached {} {}:\n",
            style("🚶").cyan(),
            style(traversal.origin).bold(),
            style(traversal.reached()).bold(),
            pluralize("facility", traversal.reached())
        )?;

        for (step, facility) in traversal.visited.iter().enumerate() {
            writeln!(
                output,
                "  {:>3}. {} {}",
                step + 1,
                style(format!("[{}]", facility.id())).yellow(),
                facility.name()
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<CycleDetector> for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, NetworkError> {
        let mut output = String::new();

        let Some(cycle) = detector.cycle() else {
            writeln!(
                output,
                "\n{} No cycles detected! Every referral path ends.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        };

        writeln!(
            output,
            "\n{} Found a cycle through {} {}:\n",
            style("❌").red().bold(),
            style(cycle.len()).red().bold(),
            pluralize("facility", cycle.len())
        )?;

        let walk: Vec<_> = cycle
            .facilities()
            .iter()
            .zip(cycle.names())
            .map(|(id, name)| format!("{name} ({id})"))
            .collect();
        writeln!(output, "  {} {}", style("🔄").yellow(), walk.join(" → "))?;

        writeln!(
            output,
            "\n{} Removing any one of these connections breaks the cycle.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

impl ReportGenerator<DistanceMatrix> for HumanReportGenerator {
    fn generate_report(&self, matrix: &DistanceMatrix) -> Result<String, NetworkError> {
        let mut output = String::new();

        if matrix.is_empty() {
            writeln!(output, "{} No facilities recorded", style("ℹ").blue())?;
            return Ok(output);
        }

        writeln!(
            output,
            "{} Shortest distances between {} {} (km):\n",
            style("📐").cyan(),
            style(matrix.len()).bold(),
            pluralize("facility", matrix.len())
        )?;

        write!(output, "{:>8}", "")?;
        for id in matrix.ids() {
            write!(output, " {:>9}", id.to_string())?;
        }
        writeln!(output)?;

        for (id, row) in matrix.rows() {
            write!(output, "{:>8}", id.to_string())?;
            for distance in row {
                if distance.is_finite() {
                    write!(output, " {distance:>9.2}")?;
                } else {
                    write!(output, " {:>9}", "-")?;
                }
            }
            writeln!(output)?;
        }

        Ok(output)
    }
}

impl ReportGenerator<SpanningTree> for HumanReportGenerator {
    fn generate_report(&self, tree: &SpanningTree) -> Result<String, NetworkError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} Spanning tree from {} ({} {}, total {}):\n",
            style("🌳").green(),
            style(tree.root).bold(),
            tree.edges.len(),
            pluralize("edge", tree.edges.len()),
            style(format_distance(tree.total_distance)).green().bold()
        )?;

        for edge in &tree.edges {
            writeln!(
                output,
                "  {} {} → {}  {}",
                style("→").dim(),
                style(&edge.from_name).yellow(),
                style(&edge.to_name).yellow(),
                format_distance(edge.distance)
            )?;
        }

        if !tree.is_fully_connected() {
            writeln!(
                output,
                "\n{} Network is not fully connected: {} {} cannot be reached from {}",
                style("⚠").yellow().bold(),
                tree.uncovered_count(),
                pluralize("facility", tree.uncovered_count()),
                tree.root
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<NearestFacility> for HumanReportGenerator {
    fn generate_report(&self, nearest: &NearestFacility) -> Result<String, NetworkError> {
        let mut output = String::new();
        let facility = nearest.facility();

        match nearest {
            NearestFacility::Origin { .. } => {
                writeln!(
                    output,
                    "{} {} {} already has capacity {}",
                    style("✅").green().bold(),
                    style(format!("[{}]", facility.id())).yellow(),
                    style(facility.name()).bold(),
                    style(facility.capacity()).green()
                )?;
            }
            NearestFacility::Routed { route, .. } => {
                writeln!(
                    output,
                    "{} Nearest facility: {} {} with capacity {}, {} away\n",
                    style("📍").cyan(),
                    style(format!("[{}]", facility.id())).yellow(),
                    style(facility.name()).bold(),
                    style(facility.capacity()).green(),
                    style(format_distance(route.total_distance)).bold()
                )?;
                output.push_str(&self.generate_report(route)?);
            }
        }

        Ok(output)
    }
}
