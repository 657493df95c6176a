mod tests_logging;
