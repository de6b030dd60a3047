mod issue_changes;
