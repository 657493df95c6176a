mod tests_error;
