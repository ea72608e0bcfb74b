mod report_lines;
