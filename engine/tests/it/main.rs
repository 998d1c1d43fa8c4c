mod demand;
mod helper;
mod report;
