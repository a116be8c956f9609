mod trace_events;
mod trace_parser;
