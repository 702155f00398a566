mod analytics_flow;
mod listing_flow;
mod resolution_flow;
